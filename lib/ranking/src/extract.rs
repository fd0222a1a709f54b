use jamrank_core::Record;

/// A positive numeric signal and the field it was read from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldMatch<'a> {
    pub field: &'a str,
    pub value: f64,
}

/// Return the first field, in priority order, holding a number strictly
/// greater than zero. Zero, negative, non-numeric and absent fields are
/// skipped.
pub fn first_positive<'a, S: AsRef<str>>(
    record: &Record,
    fields: &'a [S],
) -> Option<FieldMatch<'a>> {
    fields.iter().find_map(|field| {
        let field = field.as_ref();
        record
            .positive_number(field)
            .map(|value| FieldMatch { field, value })
    })
}
