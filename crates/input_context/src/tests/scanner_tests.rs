use super::*;

fn spans(text: &str) -> Vec<ContextQuerySpan> {
    context_query_spans(&TextInputState::new(text))
}

fn spans_at(text: &str, caret: usize) -> Vec<ContextQuerySpan> {
    context_query_spans(&TextInputState::with_caret(text, caret))
}

#[test]
fn empty_text_yields_no_spans() {
    assert!(spans("").is_empty());
}

#[test]
fn non_collapsed_selection_yields_no_spans() {
    let state = TextInputState::with_selection("#hello", 1..3).expect("valid selection");
    assert!(context_query_spans(&state).is_empty());
}

#[test]
fn plain_text_yields_no_spans() {
    assert!(spans("hello world").is_empty());
}

#[test]
fn hashtag_span_excludes_trigger_character() {
    let found = spans("#hello");
    assert_eq!(
        found,
        vec![ContextQuerySpan {
            range: 1..6,
            types: PossibleQueryTypes::HASHTAG,
            trailing: None,
        }]
    );
}

#[test]
fn command_span_excludes_trigger_character() {
    let found = spans("/start");
    assert_eq!(
        found,
        vec![ContextQuerySpan {
            range: 1..6,
            types: PossibleQueryTypes::COMMAND,
            trailing: None,
        }]
    );
}

#[test]
fn mention_span_starts_after_trigger() {
    let found = spans("hi @john");
    assert_eq!(
        found,
        vec![ContextQuerySpan {
            range: 4..8,
            types: PossibleQueryTypes::MENTION,
            trailing: None,
        }]
    );
}

#[test]
fn mention_query_tracks_caret_position() {
    let found = spans_at("hi @john", 5);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].range, 4..5);
}

#[test]
fn caret_at_start_sees_no_trigger() {
    assert!(spans_at("#hello", 0).is_empty());
}

#[test]
fn whitespace_between_trigger_and_caret_clears_candidates() {
    assert!(spans("#tag one").is_empty());
    assert!(spans("/cmd arg").is_empty());
}

#[test]
fn newline_clears_candidates_like_space() {
    assert!(spans("#tag\nx").is_empty());
}

#[test]
fn scan_state_machine_clears_but_keeps_scanning_over_whitespace() {
    // The trigger left of the space is still located, with nothing left in
    // the candidate set.
    let state = scan_for_trigger("#a b");
    assert_eq!(
        state,
        TriggerScan::Found {
            types: PossibleQueryTypes::empty(),
            query_start: 1,
        }
    );
}

#[test]
fn scan_without_trigger_ends_in_scanning_state() {
    assert!(matches!(scan_for_trigger("abc"), TriggerScan::Scanning(_)));
}

#[test]
fn single_emoji_spans_whole_text() {
    let found = spans("😀");
    assert_eq!(
        found,
        vec![ContextQuerySpan {
            range: 0..4,
            types: PossibleQueryTypes::EMOJI,
            trailing: None,
        }]
    );
}

#[test]
fn single_emoji_with_caret_at_start_yields_no_spans() {
    assert!(spans_at("😀", 0).is_empty());
}

#[test]
fn leading_bot_address_records_trailing_query_range() {
    let found = spans("@bot arg1 arg2");
    assert_eq!(
        found,
        vec![ContextQuerySpan {
            range: 1..4,
            types: PossibleQueryTypes::CONTEXT_REQUEST,
            trailing: Some(5..14),
        }]
    );
}

#[test]
fn leading_bot_address_is_caret_independent() {
    for caret in [0, 3, 7, 14] {
        let found = spans_at("@bot arg1 arg2", caret);
        assert!(
            found.iter().any(|span| span.types == PossibleQueryTypes::CONTEXT_REQUEST),
            "caret {caret} lost the context request span"
        );
    }
}

#[test]
fn leading_bot_address_requires_space_terminator() {
    // Still typing the address: the backward scan sees a plain mention.
    let found = spans("@bot");
    assert_eq!(
        found,
        vec![ContextQuerySpan {
            range: 1..4,
            types: PossibleQueryTypes::MENTION,
            trailing: None,
        }]
    );
}

#[test]
fn leading_bot_address_rejects_invalid_characters() {
    assert!(spans("@bo-t x").is_empty());
    assert!(spans("@@bot x").is_empty());
}

#[test]
fn leading_bot_address_requires_at_least_one_character() {
    // "@ x": the space arrives before any address character.
    let found = spans("@ x");
    assert!(found
        .iter()
        .all(|span| span.types != PossibleQueryTypes::CONTEXT_REQUEST));
}

#[test]
fn bare_at_sign_is_a_mention_candidate() {
    let found = spans("@");
    assert_eq!(
        found,
        vec![ContextQuerySpan {
            range: 1..1,
            types: PossibleQueryTypes::MENTION,
            trailing: None,
        }]
    );
}

#[test]
fn space_after_leading_address_suppresses_mention_span() {
    let found = spans("@bot ");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].types, PossibleQueryTypes::CONTEXT_REQUEST);
    assert_eq!(found[0].trailing, Some(5..5));
}

#[test]
fn trigger_scan_handles_multibyte_text() {
    // "hé @ça" — é and ç are two bytes each.
    let found = spans("hé @ça");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].range, 5..8);
    assert_eq!(found[0].types, PossibleQueryTypes::MENTION);
}

#[test]
fn out_of_range_caret_from_deserialized_state_is_clamped() {
    let state: TextInputState =
        serde_json::from_str(r##"{"text":"#tag","selection":{"start":99,"end":99}}"##)
            .expect("valid json");
    let found = context_query_spans(&state);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].range, 1..4);
}
