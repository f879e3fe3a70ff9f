#[derive(Debug, thiserror::Error)]
#[error("{msg}: bind = {bind:?}")]
pub struct BindError {
    msg: &'static str,
    bind: Box<str>,
}

impl BindError {
    pub(super) fn new(msg: &'static str, bind: &str) -> Self {
        Self {
            msg,
            bind: bind.into(),
        }
    }

    pub fn bind(&self) -> &str {
        &self.bind
    }
}
