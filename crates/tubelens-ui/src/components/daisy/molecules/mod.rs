pub(crate) mod form_field;

pub(crate) use form_field::FormField;
