use serde::{Deserialize, Deserializer, Serialize};

/// A row of the remote `items` table
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    #[serde(deserialize_with = "lenient_int")]
    pub id: i64,
    #[serde(default, deserialize_with = "nullable_text")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable_text")]
    pub description: String,
    /// `None` when the column is null
    #[serde(default, deserialize_with = "nullable_int")]
    pub quantity: Option<i64>,
}

impl Item {
    pub fn new(id: i64, name: impl Into<String>, description: impl Into<String>, quantity: i64) -> Self {
        Item {
            id,
            name: name.into(),
            description: description.into(),
            quantity: Some(quantity),
        }
    }

    /// Row text as shown in the list view
    pub fn display_line(&self) -> String {
        format!(
            "{} - {} - {} - {}",
            self.id,
            self.name,
            self.description,
            self.quantity.map(|q| q.to_string()).unwrap_or_default()
        )
    }
}

/// Insert record built from the creation form.
///
/// Values are the raw field text; the remote store does the type coercion.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub quantity: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrText {
    Int(i64),
    Text(String),
}

impl IntOrText {
    fn into_int<E: serde::de::Error>(self) -> Result<i64, E> {
        match self {
            IntOrText::Int(n) => Ok(n),
            IntOrText::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| E::custom(format!("expected an integer, got {:?}", s))),
        }
    }
}

/// Accepts `10` as well as `"10"`
fn lenient_int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    IntOrText::deserialize(deserializer)?.into_int()
}

/// Like [`lenient_int`], with `null` as `None`
fn nullable_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<IntOrText>::deserialize(deserializer)?
        .map(IntOrText::into_int::<D::Error>)
        .transpose()
}

fn nullable_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_numeric_strings() {
        let items: Vec<Item> = serde_json::from_str(
            r#"[{"id":1,"name":"Bolt","description":"M4","quantity":"10"}]"#,
        )
        .unwrap();
        assert_eq!(items, vec![Item::new(1, "Bolt", "M4", 10)]);
    }

    #[test]
    fn null_text_columns_become_empty() {
        let item: Item = serde_json::from_str(
            r#"{"id":"7","name":null,"description":null,"quantity":0}"#,
        )
        .unwrap();
        assert_eq!(item.id, 7);
        assert_eq!(item.name, "");
        assert_eq!(item.description, "");
    }

    #[test]
    fn null_quantity_keeps_the_row() {
        let items: Vec<Item> = serde_json::from_str(
            r#"[{"id":1,"name":"Bolt","description":"M4","quantity":10},{"id":2,"name":"Nut","description":"","quantity":null}]"#,
        )
        .unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].quantity, Some(10));
        assert_eq!(items[1].quantity, None);
        assert_eq!(items[1].display_line(), "2 - Nut -  - ");
    }

    #[test]
    fn missing_quantity_reads_as_none() {
        let item: Item = serde_json::from_str(r#"{"id":3,"name":"Pin","description":""}"#).unwrap();
        assert_eq!(item.quantity, None);
    }

    #[test]
    fn rejects_non_numeric_quantity() {
        let result = serde_json::from_str::<Item>(
            r#"{"id":1,"name":"Bolt","description":"M4","quantity":"lots"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn display_line_joins_columns() {
        let item = Item::new(1, "Bolt", "M4", 10);
        assert_eq!(item.display_line(), "1 - Bolt - M4 - 10");
    }

    #[test]
    fn new_item_serializes_raw_strings() {
        let record = NewItem {
            id: "2".into(),
            name: "Nut".into(),
            description: String::new(),
            quantity: "5".into(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": "2", "name": "Nut", "description": "", "quantity": "5"})
        );
    }
}
