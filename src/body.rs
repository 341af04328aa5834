//! JSON request body decoding.

use std::io::Read;

use serde::de::DeserializeOwned;

use crate::error::Error;

/// A destination that can be filled from JSON bytes.
///
/// Blanket-implemented for every [`DeserializeOwned`] type, so any
/// `&mut T` can be passed to [`decode_json_multi`].
pub trait JsonTarget {
    /// Decodes `data` and stores the result in `self`.
    fn decode_from(&mut self, data: &[u8]) -> Result<(), serde_json::Error>;
}

impl<T: DeserializeOwned> JsonTarget for T {
    fn decode_from(&mut self, data: &[u8]) -> Result<(), serde_json::Error> {
        *self = serde_json::from_slice(data)?;
        Ok(())
    }
}

fn read_body<R: Read>(body: Option<R>) -> Result<Vec<u8>, Error> {
    let mut body = body.ok_or(Error::MissingBody)?;
    let mut data = Vec::new();
    body.read_to_end(&mut data)?;
    Ok(data)
}

/// Reads the whole body and decodes it as JSON.
///
/// # Errors
///
/// [`Error::MissingBody`] if there is no body, [`Error::Io`] if reading
/// fails, [`Error::Json`] if the bytes are not valid JSON for `T`.
///
/// # Examples
///
/// ```
/// use serde::Deserialize;
/// use http_helper::decode_json;
///
/// #[derive(Deserialize)]
/// struct Login {
///     user: String,
/// }
///
/// let body: &[u8] = br#"{"user":"alice"}"#;
/// let login: Login = decode_json(Some(body)).expect("valid body");
/// assert_eq!(login.user, "alice");
/// ```
pub fn decode_json<T, R>(body: Option<R>) -> Result<T, Error>
where
    T: DeserializeOwned,
    R: Read,
{
    let data = read_body(body)?;
    Ok(serde_json::from_slice(&data)?)
}

/// Reads the whole body and decodes it into `dst`.
///
/// `dst` is left unchanged when decoding fails.
pub fn decode_json_into<T, R>(body: Option<R>, dst: &mut T) -> Result<(), Error>
where
    T: DeserializeOwned,
    R: Read,
{
    *dst = decode_json(body)?;
    Ok(())
}

/// Reads the body once and decodes the same bytes into every target.
///
/// Targets are filled in order; decoding stops at the first failure, and
/// targets before it keep their decoded values.
///
/// # Examples
///
/// ```
/// use serde::Deserialize;
/// use http_helper::decode_json_multi;
///
/// #[derive(Default, Deserialize)]
/// struct Paging {
///     page: u32,
/// }
///
/// #[derive(Default, Deserialize)]
/// struct Filter {
///     status: String,
/// }
///
/// let body: &[u8] = br#"{"page":2,"status":"open"}"#;
/// let (mut paging, mut filter) = (Paging::default(), Filter::default());
/// decode_json_multi(Some(body), &mut [&mut paging, &mut filter]).expect("valid body");
///
/// assert_eq!(paging.page, 2);
/// assert_eq!(filter.status, "open");
/// ```
pub fn decode_json_multi<R: Read>(
    body: Option<R>,
    dsts: &mut [&mut dyn JsonTarget],
) -> Result<(), Error> {
    let data = read_body(body)?;
    for dst in dsts.iter_mut() {
        dst.decode_from(&data)?;
    }
    Ok(())
}
