use std::{fmt, marker::PhantomData};

use serde::{
    de::{self, IgnoredAny, SeqAccess, Visitor},
    ser::SerializeSeq,
    Deserialize, Deserializer, Serialize, Serializer,
};

use crate::{Matrix, Scalar};

/// Serialized as a sequence of `N` rows, each a sequence of `M` elements.
/// A vector is therefore `[[x], [y], [z]]`.
impl<const N: usize, const M: usize, T> Serialize for Matrix<N, M, T>
where
    T: Scalar + Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(N))?;
        for row in &self.data {
            seq.serialize_element(&row[..])?;
        }
        seq.end()
    }
}

impl<'de, const N: usize, const M: usize, T> Deserialize<'de> for Matrix<N, M, T>
where
    T: Scalar + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(RowsVisitor::<N, M, T>(PhantomData))
    }
}

struct RowsVisitor<const N: usize, const M: usize, T>(PhantomData<T>);

impl<'de, const N: usize, const M: usize, T> Visitor<'de> for RowsVisitor<N, M, T>
where
    T: Scalar + Deserialize<'de>,
{
    type Value = Matrix<N, M, T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a sequence of {N} rows with {M} elements each")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut m = Matrix::zeros();
        for row in 0..N {
            let values: Vec<T> = match seq.next_element()? {
                Some(values) => values,
                None => return Err(de::Error::invalid_length(row, &self)),
            };

            if values.len() != M {
                let expected = format!("row {row} with {M} elements");
                return Err(de::Error::invalid_length(values.len(), &expected.as_str()));
            }
            m.data[row].copy_from_slice(&values);
        }

        if seq.next_element::<IgnoredAny>()?.is_some() {
            return Err(de::Error::invalid_length(N + 1, &self));
        }

        Ok(m)
    }
}
