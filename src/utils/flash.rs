use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tower_cookies::cookie::ParseError;
use tower_cookies::{Cookie, Cookies};

#[derive(Deserialize)]
struct ValuedMessage<T> {
    #[serde(rename = "_")]
    value: T,
}

#[derive(Serialize)]
struct ValuedMessageRef<'a, T> {
    #[serde(rename = "_")]
    value: &'a T,
}

pub const FLASH_COOKIE_NAME: &str = "_flash";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct FlashData {
    pub kind: String,
    pub message: String,
}

impl FlashData {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: "success".to_owned(),
            message: message.into(),
        }
    }
}

/// Reads the pending flash message and clears it, so it shows exactly once.
pub fn take_flash_cookie<T>(cookies: &Cookies) -> Option<T>
where
    T: DeserializeOwned,
{
    let flash_cookie = cookies.get(FLASH_COOKIE_NAME)?;

    let mut removal = Cookie::new(FLASH_COOKIE_NAME, "");
    removal.set_path("/");
    cookies.remove(removal);

    serde_json::from_str::<ValuedMessage<T>>(flash_cookie.value())
        .ok()
        .map(|ValuedMessage { value }| value)
}

pub fn set_flash_cookie<T>(cookies: &Cookies, data: &T)
where
    T: Serialize,
{
    let valued_message_ref = ValuedMessageRef { value: data };
    let json = match serde_json::to_string(&valued_message_ref) {
        Ok(json) => json,
        Err(e) => {
            tracing::warn!("Dropping unserializable flash message: {}", e);
            return;
        }
    };

    match encoded_cookie(json) {
        Ok(cookie) => cookies.add(cookie),
        Err(e) => tracing::warn!("Dropping flash message that is not a valid cookie: {}", e),
    }
}

// `CookieManager` writes values verbatim but reads them percent-decoded, so the
// value goes out already encoded.
fn encoded_cookie(json: String) -> Result<Cookie<'static>, ParseError> {
    let pair = Cookie::new(FLASH_COOKIE_NAME, json).encoded().stripped().to_string();
    let mut cookie = Cookie::parse(pair)?;
    cookie.set_path("/");
    Ok(cookie)
}
