pub mod new;
pub mod callback;
pub mod err;
pub mod ok;

/// Query parameters Zoho appends when redirecting back after consent.
///
/// Zoho also sends `location` and `accounts-server`, which are ignored.
/// Repeated keys are collected, the first non-empty value counts.
#[derive(rocket::form::FromForm, Debug, Default, Clone, PartialEq, Eq)]
pub struct RedirectQuery {
    pub code: Vec<String>,
    pub error: Vec<String>,
    pub error_description: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redirect<'a> {
    ProviderError {
        error: &'a str,
        description: Option<&'a str>,
    },
    MissingCode,
    Code(&'a str),
}

fn non_empty(values: &[String]) -> Option<&str> {
    values.iter().map(String::as_str).find(|v| !v.is_empty())
}

impl RedirectQuery {
    /// An `error` always wins over a `code`. Empty values count as absent.
    pub fn classify(&self) -> Redirect<'_> {
        if let Some(error) = non_empty(&self.error) {
            return Redirect::ProviderError {
                error,
                description: self.error_description.first().map(String::as_str),
            };
        }
        match non_empty(&self.code) {
            Some(code) => Redirect::Code(code),
            None => Redirect::MissingCode,
        }
    }
}
