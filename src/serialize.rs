use crate::llist::LinkedList;
use core::fmt;
use core::marker::PhantomData;
use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};

impl<T> Serialize for LinkedList<T>
where
    T: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for v in self.iter() {
            seq.serialize_element(v)?;
        }
        seq.end()
    }
}

struct LinkedListVisitor<T> {
    _phantom: PhantomData<fn() -> T>,
}

impl<'de, T> Visitor<'de> for LinkedListVisitor<T>
where
    T: Deserialize<'de>,
{
    type Value = LinkedList<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sequence of list values")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut list = LinkedList::new();
        {
            let mut appender = list.appender();
            while let Some(v) = seq.next_element()? {
                appender.append(v);
            }
        }
        Ok(list)
    }
}

impl<'de, T> Deserialize<'de> for LinkedList<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(LinkedListVisitor {
            _phantom: Default::default(),
        })
    }
}
