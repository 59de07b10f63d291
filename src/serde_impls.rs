//! `Maybe` serializes as [`Option`], `Fallible` as [`Result`].
use crate::fallible::Fallible;
use crate::maybe::Maybe;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl<'de, T> Deserialize<'de> for Maybe<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::deserialize(deserializer).map(Self::from)
    }
}

impl<T> Serialize for Maybe<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        Option::<&T>::from(self.as_ref()).serialize(serializer)
    }
}

impl<'de, T, E> Deserialize<'de> for Fallible<T, E>
where
    T: Deserialize<'de>,
    E: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Result::deserialize(deserializer).map(Self::from)
    }
}

impl<T, E> Serialize for Fallible<T, E>
where
    T: Serialize,
    E: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_ref().into_result().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bincode_round_trip() {
        for value in [Maybe::some("text".to_owned()), Maybe::none()] {
            let bytes = bincode::serialize(&value).unwrap();
            assert_eq!(bincode::deserialize::<Maybe<String>>(&bytes).unwrap(), value);
        }
        for value in [Fallible::<u32, String>::some(7), Fallible::none("bad".to_owned())] {
            let bytes = bincode::serialize(&value).unwrap();
            assert_eq!(bincode::deserialize::<Fallible<u32, String>>(&bytes).unwrap(), value);
        }
        let nested = Maybe::some(Maybe::some(None::<i64>));
        let bytes = bincode::serialize(&nested).unwrap();
        assert_eq!(bincode::deserialize::<Maybe<Maybe<Option<i64>>>>(&bytes).unwrap(), nested);
    }

    #[test]
    fn json_shape() {
        assert_eq!(serde_json::to_string(&Maybe::some(1)).unwrap(), "1");
        assert_eq!(serde_json::to_string(&Maybe::<i32>::none()).unwrap(), "null");
        assert_eq!(serde_json::to_string(&Fallible::<i32, &str>::none("e")).unwrap(), r#"{"Err":"e"}"#);
        assert_eq!(serde_json::from_str::<Fallible<i32, String>>(r#"{"Ok":3}"#).unwrap(), Fallible::some(3));
    }
}
