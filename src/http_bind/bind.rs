use super::BindError;

use crate::binding::{Pattern, PatternPair, Polarity};

use http::{Method, Request, Uri};

const ANY_VERB: &str = "*";
const SLASH: char = '/';
const QUESTION: char = '?';

/// Turns `VERB path` (or a bare path, meaning any verb) into the
/// verb-normalized form `VERB/path`.
pub fn normalize_bind(bind: &str) -> Result<String, BindError> {
    let trimmed = bind.trim();
    if trimmed.is_empty() {
        return Err(BindError::new("bind url can not be empty", bind));
    }

    let split = trimmed.find(|c: char| c.is_whitespace() || c == SLASH || c == QUESTION);
    let (verb, path) = match split {
        Some(0) => (ANY_VERB, trimmed),
        Some(i) => (&trimmed[..i], trimmed[i..].trim_start()),
        None => return Err(BindError::new("bind url is missing a path", bind)),
    };

    let method = if verb == ANY_VERB {
        None
    } else {
        let method = Method::from_bytes(verb.to_ascii_uppercase().as_bytes())
            .map_err(|_| BindError::new("invalid http method", bind))?;
        Some(method)
    };

    if path.contains(char::is_whitespace) {
        return Err(BindError::new("bind path can not contain whitespace", bind));
    }

    let method = method.as_ref().map_or(ANY_VERB, Method::as_str);
    let mut url = String::with_capacity(method.len() + path.len() + 1);
    url.push_str(method);
    if !path.starts_with(SLASH) && !path.starts_with(QUESTION) {
        url.push(SLASH);
    }
    url.push_str(path);
    Ok(url)
}

/// Builds the request url `METHOD/path?query` matched against bind urls.
pub fn request_url(method: &Method, uri: &Uri) -> String {
    let path = uri.path_and_query().map_or("/", |pq| pq.as_str());
    format!("{}{}", method, path)
}

impl Pattern {
    pub fn try_from_bind(bind: &str, polarity: Polarity) -> Result<Self, BindError> {
        Ok(Self::new(&normalize_bind(bind)?, polarity))
    }
}

impl PatternPair {
    pub fn from_bind(bind: &str) -> Self {
        match Self::try_from_bind(bind) {
            Ok(pair) => pair,
            Err(e) => panic!("{}", e),
        }
    }

    pub fn try_from_bind(bind: &str) -> Result<Self, BindError> {
        Ok(Self::new(&normalize_bind(bind)?))
    }

    pub fn resolve_request<B>(&self, req: &Request<B>) -> &Pattern {
        self.resolve(&request_url(req.method(), req.uri()))
    }
}
