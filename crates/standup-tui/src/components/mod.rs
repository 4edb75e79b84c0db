pub mod form_view;
