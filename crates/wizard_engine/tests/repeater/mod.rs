use pretty_assertions::assert_eq;
use wizard_engine::{parse_count, repeat_text, repeater::PRESET_COUNTS, RepeatRequest, Separator};

#[test]
fn test_exact_number_of_copies() {
    for count in [1, 2, 7, 10, 999, 100_000] {
        for separator in Separator::ALL {
            let output = repeat_text(" €uro ", count, separator).unwrap();
            let copies: Vec<&str> = if separator == Separator::None {
                output.matches("€uro").collect()
            } else {
                output.split(separator.as_str()).collect()
            };
            assert_eq!(copies.len(), count as usize, "{separator} x{count}");
            assert!(copies.iter().all(|c| *c == "€uro"));
        }
    }
}

#[test]
fn test_out_of_range_counts() {
    for separator in Separator::ALL {
        assert!(repeat_text("text", 0, separator).is_err());
        assert!(repeat_text("text", 100_001, separator).is_err());
    }
}

#[test]
fn test_presets_are_valid() {
    for count in PRESET_COUNTS {
        assert_eq!(parse_count(&count.to_string()).unwrap(), count);
    }
}

#[test]
fn test_error_message() {
    let err = repeat_text("text", 0, Separator::Newline).unwrap_err();
    assert_eq!(err.to_string(), "Please enter an integer between 1 and 100000");
}

#[test]
fn test_request_matches_function() {
    let request = RepeatRequest::new("ab ", 4, Separator::Comma);
    assert_eq!(request.execute().unwrap(), repeat_text("ab ", 4, Separator::Comma).unwrap());
    assert_eq!(request.execute().unwrap(), request.execute().unwrap());
}
