//! Caret-context scanning: locates emoji, hashtag, mention, command and
//! inline-bot query candidates around the caret of a text-input state.

use crate::emoji::is_single_emoji;
use crate::input_state::{floor_char_boundary, TextInputState};
use crate::query::{ContextQuerySpan, InputQuery, MentionTypes, PossibleQueryTypes};

/// Locates candidate query spans for the given input state.
///
/// Returns nothing while a non-collapsed selection is active or the text is
/// empty. A leading inline-bot address is detected independently of the
/// caret; everything else is anchored on the text before the caret.
pub fn context_query_spans(state: &TextInputState) -> Vec<ContextQuerySpan> {
    let mut results = Vec::new();
    let Some(caret) = state.caret() else {
        return results;
    };
    let text = state.text.as_str();
    if text.is_empty() {
        return results;
    }

    if let Some(span) = leading_context_request(text) {
        results.push(span);
    }

    // Deserialized states may carry an out-of-range caret; scanning never
    // trusts it past the text.
    let max_index = floor_char_boundary(text, caret.min(text.len()));
    if max_index == 0 {
        return results;
    }

    if is_single_emoji(text) {
        results.push(ContextQuerySpan {
            range: 0..text.len(),
            types: PossibleQueryTypes::EMOJI,
            trailing: None,
        });
        return results;
    }

    if let TriggerScan::Found { types, query_start } = scan_for_trigger(&text[..max_index]) {
        if !types.is_empty() {
            results.push(ContextQuerySpan {
                range: query_start..max_index,
                types,
                trailing: None,
            });
        }
    }

    results
}

/// Resolves located spans into typed queries. Spans whose candidate set is
/// not a singleton are dropped.
pub fn input_context_queries(state: &TextInputState) -> Vec<InputQuery> {
    let text = state.text.as_str();
    let mut queries = Vec::new();
    for span in context_query_spans(state) {
        let query = text[span.range.clone()].to_string();
        if span.types == PossibleQueryTypes::EMOJI {
            queries.push(InputQuery::Emoji(query));
        } else if span.types == PossibleQueryTypes::HASHTAG {
            queries.push(InputQuery::Hashtag(query));
        } else if span.types == PossibleQueryTypes::MENTION {
            let mut types = MentionTypes::MEMBERS;
            // Only a mention starting right after a leading `@` can address
            // an inline bot.
            if span.range.start == 1 {
                types |= MentionTypes::CONTEXT_BOTS;
            }
            queries.push(InputQuery::Mention { query, types });
        } else if span.types == PossibleQueryTypes::COMMAND {
            queries.push(InputQuery::Command(query));
        } else if span.types == PossibleQueryTypes::CONTEXT_REQUEST {
            if let Some(trailing) = span.trailing {
                queries.push(InputQuery::ContextRequest {
                    address: query,
                    query: text[trailing].to_string(),
                });
            }
        }
    }
    queries
}

/// Detects `@address query...` at the very start of the text. The address
/// must consist of `[a-zA-Z0-9_]` and be terminated by a space; anything
/// else means the address is still being typed or the text is not an
/// inline-bot request.
fn leading_context_request(text: &str) -> Option<ContextQuerySpan> {
    if !text.starts_with('@') || text.len() == 1 {
        return None;
    }
    let address_start = 1;
    for (offset, ch) in text[address_start..].char_indices() {
        let index = address_start + offset;
        if ch == ' ' {
            if index == address_start {
                return None;
            }
            return Some(ContextQuerySpan {
                range: address_start..index,
                types: PossibleQueryTypes::CONTEXT_REQUEST,
                trailing: Some(index + 1..text.len()),
            });
        }
        if !ch.is_ascii_alphanumeric() && ch != '_' {
            return None;
        }
    }
    None
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TriggerScan {
    Scanning(PossibleQueryTypes),
    Found {
        types: PossibleQueryTypes,
        query_start: usize,
    },
}

/// Walks backward from the end of `prefix` looking for a trigger character.
/// Whitespace clears the candidate set but the walk continues, so a trigger
/// further left is still located (and then discarded for having an empty
/// set).
fn scan_for_trigger(prefix: &str) -> TriggerScan {
    let mut state = TriggerScan::Scanning(
        PossibleQueryTypes::COMMAND | PossibleQueryTypes::MENTION | PossibleQueryTypes::HASHTAG,
    );
    for (index, ch) in prefix.char_indices().rev() {
        let TriggerScan::Scanning(candidates) = state else {
            break;
        };
        state = match ch {
            ' ' | '\n' => TriggerScan::Scanning(PossibleQueryTypes::empty()),
            '#' => TriggerScan::Found {
                types: candidates & PossibleQueryTypes::HASHTAG,
                query_start: index + 1,
            },
            '@' => TriggerScan::Found {
                types: candidates & PossibleQueryTypes::MENTION,
                query_start: index + 1,
            },
            '/' => TriggerScan::Found {
                types: candidates & PossibleQueryTypes::COMMAND,
                query_start: index + 1,
            },
            _ => TriggerScan::Scanning(candidates),
        };
    }
    state
}

#[cfg(test)]
#[path = "tests/scanner_tests.rs"]
mod tests;
