#[derive(Debug, Clone)]
pub struct ContactName(String);

impl ContactName {
    /// Any non-empty name is accepted; the contact form imposes no shape
    /// on what people call themselves.
    pub fn parse(s: String) -> Result<Self, String> {
        if s.trim().is_empty() {
            return Err("A contact name cannot be empty.".into());
        }
        Ok(Self(s))
    }
}

impl AsRef<str> for ContactName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
