use super::request_id::find_request_id;
use super::{LogLineParser, ParametersLine, ParsedLine};

pub struct ParametersLineParser;

impl LogLineParser for ParametersLineParser {
    fn parse_line(&self, payload: &str) -> ParsedLine {
        let Some(id) = find_request_id(payload) else {
            return ParsedLine::Invalid;
        };

        let Some((_, rest)) = payload.split_once(':') else {
            return ParsedLine::Invalid;
        };

        // Skip the single space the logger writes after the colon.
        let mut chars = rest.chars();
        chars.next();

        ParsedLine::Parameters(ParametersLine {
            id: id.to_string(),
            value: chars.as_str().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "0f4c5a8e-6d2b-4c55-9d2e-1b5a7e3c9f10";

    #[test]
    fn test_parameters_value_is_verbatim() {
        let payload = format!(
            "[{}]   Parameters: {{\"user\"=>{{\"email\"=>\"a@b.c\", \"at\"=>\"10:00:00\"}}}}",
            ID
        );

        match ParametersLineParser.parse_line(&payload) {
            ParsedLine::Parameters(line) => {
                assert_eq!(line.id, ID);
                assert_eq!(
                    line.value,
                    "{\"user\"=>{\"email\"=>\"a@b.c\", \"at\"=>\"10:00:00\"}}"
                );
            }
            other => panic!("expected Parameters, got {:?}", other),
        }
    }

    #[test]
    fn test_parameters_empty_value() {
        let payload = format!("[{}]   Parameters:", ID);

        match ParametersLineParser.parse_line(&payload) {
            ParsedLine::Parameters(line) => assert_eq!(line.value, ""),
            other => panic!("expected Parameters, got {:?}", other),
        }
    }

    #[test]
    fn test_parameters_bad_id() {
        let payload = "[abc]   Parameters: {\"id\"=>\"1\"}";
        assert_eq!(ParametersLineParser.parse_line(payload), ParsedLine::Invalid);
    }
}
