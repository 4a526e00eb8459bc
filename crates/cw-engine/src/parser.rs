//! Raw-input parsing: trim, lowercase, split into verb and argument.

/// A parsed player command: a lowercase verb and the untouched remainder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    /// The command verb.
    pub verb: String,
    /// Everything after the first whitespace, unsplit, or `None`.
    pub argument: Option<String>,
}

/// A two-word phrase that parses into something other than its first word.
struct PhraseOverride {
    verb: &'static str,
    argument: &'static str,
    /// Replacement verb, or `None` to keep the original.
    rewrite: Option<&'static str>,
    /// Whether the argument is consumed by the rewrite.
    clear_argument: bool,
}

/// Magic phrases adjusted after the plain verb/argument split. This is a
/// data table so new phrases are one line, not a new branch.
const PHRASE_OVERRIDES: &[PhraseOverride] = &[
    // "open sesame" is the single verb "sesame"; the argument is consumed.
    PhraseOverride {
        verb: "open",
        argument: "sesame",
        rewrite: Some("sesame"),
        clear_argument: true,
    },
    // "hello sailor" and "flux capacitor" keep their second word as
    // narration context.
    PhraseOverride {
        verb: "hello",
        argument: "sailor",
        rewrite: None,
        clear_argument: false,
    },
    PhraseOverride {
        verb: "flux",
        argument: "capacitor",
        rewrite: None,
        clear_argument: false,
    },
];

/// Parse raw player input. Returns `None` for empty or whitespace-only
/// input; the caller should prompt again, this is not an error.
pub fn parse_command(input: &str) -> Option<ParsedCommand> {
    let cleaned = input.trim().to_lowercase();
    if cleaned.is_empty() {
        return None;
    }

    let (verb, rest) = match cleaned.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb.to_string(), rest.trim_start().to_string()),
        None => (cleaned, String::new()),
    };
    let mut argument = if rest.is_empty() { None } else { Some(rest) };
    let mut verb = verb;

    for phrase in PHRASE_OVERRIDES {
        if verb == phrase.verb && argument.as_deref() == Some(phrase.argument) {
            if let Some(rewrite) = phrase.rewrite {
                verb = rewrite.to_string();
            }
            if phrase.clear_argument {
                argument = None;
            }
            break;
        }
    }

    Some(ParsedCommand { verb, argument })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(verb: &str, argument: Option<&str>) -> ParsedCommand {
        ParsedCommand {
            verb: verb.to_string(),
            argument: argument.map(str::to_string),
        }
    }

    #[test]
    fn empty_input_is_no_command() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("   "), None);
        assert_eq!(parse_command("\t\n"), None);
    }

    #[test]
    fn bare_verb_has_no_argument() {
        assert_eq!(parse_command("look"), Some(parsed("look", None)));
    }

    #[test]
    fn input_is_lowercased_and_trimmed() {
        assert_eq!(
            parse_command("  GO North  "),
            Some(parsed("go", Some("north")))
        );
    }

    #[test]
    fn argument_keeps_remaining_words_unsplit() {
        assert_eq!(
            parse_command("use pickaxe on rubble"),
            Some(parsed("use", Some("pickaxe on rubble")))
        );
    }

    #[test]
    fn open_sesame_collapses_to_sesame() {
        assert_eq!(parse_command("open sesame"), Some(parsed("sesame", None)));
        // Plain "open" is untouched.
        assert_eq!(parse_command("open door"), Some(parsed("open", Some("door"))));
    }

    #[test]
    fn hello_sailor_keeps_its_argument() {
        assert_eq!(
            parse_command("hello sailor"),
            Some(parsed("hello", Some("sailor")))
        );
        assert_eq!(
            parse_command("flux capacitor"),
            Some(parsed("flux", Some("capacitor")))
        );
    }
}
