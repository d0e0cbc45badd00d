use serde::{
    ser::{Error, Serialize, SerializeMap, SerializeSeq},
    Serializer,
};

use crate::value::{Node, NodeKind};

impl<'a> Serialize for Node<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.kind {
            NodeKind::Null | NodeKind::Unknown => serializer.serialize_unit(),
            NodeKind::Boolean => serializer.serialize_bool(self.literal == "true"),
            NodeKind::String => serializer.serialize_str(&self.literal),
            NodeKind::Number => {
                let literal = self.literal.as_ref();

                if let Ok(num) = literal.parse::<u64>() {
                    serializer.serialize_u64(num)
                } else if let Ok(num) = literal.parse::<i64>() {
                    serializer.serialize_i64(num)
                } else if let Ok(num) = literal.parse::<f64>() {
                    serializer.serialize_f64(num)
                } else {
                    Err(S::Error::custom(format!(
                        "invalid number `{}` at line {} col {}",
                        literal, self.start.line, self.start.col
                    )))
                }
            }
            NodeKind::Array => {
                let mut seq = serializer.serialize_seq(Some(self.children.len()))?;

                for v in &self.children {
                    seq.serialize_element(v)?;
                }

                seq.end()
            }
            NodeKind::Object => {
                let mut map = serializer.serialize_map(Some(self.entries().count()))?;

                for (k, v) in self.entries() {
                    map.serialize_entry(k, v)?;
                }

                map.end()
            }
        }
    }
}
