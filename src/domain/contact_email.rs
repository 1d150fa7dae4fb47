#[derive(Debug, Clone)]
pub struct ContactEmail(String);

fn is_plain_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment
            .chars()
            .all(|c| !c.is_whitespace() && c != '@')
}

impl ContactEmail {
    /// Accepts the `local@domain.tld` shape: a single `@` separating two
    /// non-empty runs free of whitespace, with a dot somewhere inside the
    /// domain. `a@b` is rejected; non-ASCII local parts are fine.
    pub fn parse(s: String) -> Result<Self, String> {
        let valid = s.rsplit_once('@').is_some_and(|(local, domain)| {
            is_plain_segment(local)
                && is_plain_segment(domain)
                && domain
                    .char_indices()
                    .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
        });

        if !valid {
            return Err(format!("{s} is not a valid email address."));
        }
        Ok(Self(s))
    }
}

impl AsRef<str> for ContactEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ContactEmail {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        ContactEmail::parse(value)
    }
}
