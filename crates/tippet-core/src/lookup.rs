//! Lookups over a business object's extension and event-definition lists.
//!
//! `None` means "no such entry", which callers treat as "nothing to show".
//! At most one entry per discriminator is expected; the first match wins.

use crate::model::get;
use serde_json::Value;

/// The business object's extension entries, when present and non-empty.
pub fn extension_values(business_object: &Value) -> Option<&Vec<Value>> {
    let values = get(get(business_object, "extensionElements")?, "values")?.as_array()?;
    if values.is_empty() { None } else { Some(values) }
}

/// First entry whose `$type` equals `discriminator`.
pub fn find_extension<'a>(values: &'a [Value], discriminator: &str) -> Option<&'a Value> {
    values
        .iter()
        .find(|v| v.get("$type").and_then(Value::as_str) == Some(discriminator))
}

/// Searches the business object's own extension list.
pub fn find_extension_of<'a>(business_object: &'a Value, discriminator: &str) -> Option<&'a Value> {
    find_extension(extension_values(business_object)?, discriminator)
}

/// Searches the business object's event-definition list.
pub fn find_event_definition<'a>(
    business_object: &'a Value,
    discriminator: &str,
) -> Option<&'a Value> {
    let definitions = get(business_object, "eventDefinitions")?.as_array()?;
    find_extension(definitions, discriminator)
}
