// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! GitHub Actions workflow commands.
//!
//! Lines of the form `::warning::message` printed to stdout are turned into
//! annotations by the Actions runner. Message data must be escaped so that
//! line breaks and percent signs survive.

/// Annotation severity understood by the runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq,)]
pub enum Annotation
{
    Warning,
    Error,
}

impl Annotation
{
    fn command(self,) -> &'static str
    {
        match self {
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// Escapes workflow command data.
pub fn escape_data(message: &str,) -> String
{
    let mut escaped = String::with_capacity(message.len(),);
    for candidate in message.chars() {
        match candidate {
            '%' => escaped.push_str("%25",),
            '\r' => escaped.push_str("%0D",),
            '\n' => escaped.push_str("%0A",),
            _ => escaped.push(candidate,),
        }
    }
    escaped
}

/// Formats a workflow command line for `message`.
///
/// # Examples
///
/// ```
/// use prerelease_pruner::workflow::{Annotation, format_command};
///
/// assert_eq!(format_command(Annotation::Warning, "50% done\nnext",), "::warning::50%25 done%0Anext");
/// ```
pub fn format_command(annotation: Annotation, message: &str,) -> String
{
    format!("::{}::{}", annotation.command(), escape_data(message,))
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn plain_messages_are_unchanged()
    {
        assert_eq!(escape_data("deleted build-foo.1"), "deleted build-foo.1");
    }

    #[test]
    fn percent_is_escaped_before_line_breaks()
    {
        assert_eq!(escape_data("%0A\r\n"), "%250A%0D%0A");
    }

    #[test]
    fn error_command()
    {
        assert_eq!(
            format_command(Annotation::Error, "release fetch failed"),
            "::error::release fetch failed"
        );
    }
}
