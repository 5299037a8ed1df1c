use codepoint_core::boundary::{utf16, utf8};
use codepoint_core::{normalize, BoundaryError, BoundaryResult};

use super::args::{Cli, Command, TextArgs};
use super::input::Input;
use super::output::Outcome;
use crate::exit_codes::{INVALID_INPUT, SUCCESS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    First,
    Last,
    DropFirst,
    DropLast,
    Len,
    Normalize,
}

pub fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    let (op, args) = match &cli.cmd {
        Command::First(args) => (Operation::First, args),
        Command::Last(args) => (Operation::Last, args),
        Command::DropFirst(args) => (Operation::DropFirst, args),
        Command::DropLast(args) => (Operation::DropLast, args),
        Command::Len(args) => (Operation::Len, args),
        Command::Normalize(args) => (Operation::Normalize, args),
    };
    run(op, args, &cli)
}

fn run(op: Operation, args: &TextArgs, cli: &Cli) -> anyhow::Result<i32> {
    let input = Input::read(args, cli.global.encoding)?;
    tracing::debug!(
        operation = ?op,
        encoding = ?input.encoding(),
        units = input.unit_len(),
        "applying boundary operation"
    );

    match apply(op, &input) {
        Ok(outcome) => {
            println!("{}", outcome.render(cli.global.format)?);
            Ok(SUCCESS)
        }
        Err(err) => {
            tracing::debug!(operation = ?op, error = %err, "input rejected");
            eprintln!("error: {err}");
            Ok(exit_code(&err))
        }
    }
}

fn exit_code(err: &BoundaryError) -> i32 {
    match err {
        BoundaryError::InvalidArgument { .. } | BoundaryError::UnpairedSurrogate { .. } => {
            INVALID_INPUT
        }
    }
}

fn apply(op: Operation, input: &Input) -> BoundaryResult<Outcome> {
    let outcome = match (op, input) {
        (Operation::First, Input::Utf8(text)) => Outcome::scalar(utf8::first_scalar_value(text)?),
        (Operation::First, Input::Utf16(units)) => {
            Outcome::scalar(utf16::first_scalar_value(units)?)
        }
        (Operation::Last, Input::Utf8(text)) => Outcome::scalar(utf8::last_scalar_value(text)?),
        (Operation::Last, Input::Utf16(units)) => {
            Outcome::scalar(utf16::last_scalar_value(units)?)
        }
        (Operation::DropFirst, input) => remainder(input, Edge::First),
        (Operation::DropLast, input) => remainder(input, Edge::Last),
        (Operation::Len, input) => Outcome::Length {
            encoding: input.encoding(),
            scalars: input.scalar_len(),
            units: input.unit_len(),
        },
        (Operation::Normalize, input) => {
            let text = normalize(&input.to_display());
            Outcome::Text {
                encoding: input.encoding(),
                units: text.len(),
                text,
            }
        }
    };
    Ok(outcome)
}

#[derive(Debug, Clone, Copy)]
enum Edge {
    First,
    Last,
}

fn remainder(input: &Input, edge: Edge) -> Outcome {
    let rest = match (input, edge) {
        (Input::Utf8(text), Edge::First) => {
            Input::Utf8(utf8::remove_first_scalar_value(text).to_string())
        }
        (Input::Utf8(text), Edge::Last) => {
            Input::Utf8(utf8::remove_last_scalar_value(text).to_string())
        }
        (Input::Utf16(units), Edge::First) => {
            Input::Utf16(utf16::remove_first_scalar_value(units).to_vec())
        }
        (Input::Utf16(units), Edge::Last) => {
            Input::Utf16(utf16::remove_last_scalar_value(units).to_vec())
        }
    };
    Outcome::Text {
        encoding: rest.encoding(),
        text: rest.to_display(),
        units: rest.unit_len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::Encoding;

    #[test]
    fn last_of_surrogate_pair_in_utf16() {
        let input = Input::Utf16("x\u{1F600}".encode_utf16().collect());
        assert_eq!(
            apply(Operation::Last, &input).unwrap(),
            Outcome::scalar('\u{1F600}')
        );
    }

    #[test]
    fn drop_last_reports_remaining_units() {
        let input = Input::Utf16("x\u{1F600}".encode_utf16().collect());
        assert_eq!(
            apply(Operation::DropLast, &input).unwrap(),
            Outcome::Text {
                encoding: Encoding::Utf16,
                text: "x".to_string(),
                units: 1,
            }
        );
    }

    #[test]
    fn empty_input_is_rejected_for_extraction_only() {
        let input = Input::Utf8(String::new());
        assert!(matches!(
            apply(Operation::First, &input),
            Err(BoundaryError::InvalidArgument { .. })
        ));
        assert!(apply(Operation::DropFirst, &input).is_ok());
        assert!(apply(Operation::Normalize, &input).is_ok());
    }

    #[test]
    fn unpaired_surrogate_is_rejected() {
        let input = Input::Utf16(vec![0x61, 0xDE00]);
        assert_eq!(
            apply(Operation::Last, &input).unwrap_err(),
            BoundaryError::UnpairedSurrogate {
                index: 1,
                unit: 0xDE00
            }
        );
    }

    #[test]
    fn rejected_input_maps_to_invalid_input_exit_code() {
        let input = Input::Utf16(vec![0x61, 0xD83D]);
        let err = apply(Operation::Last, &input).unwrap_err();
        assert_eq!(exit_code(&err), INVALID_INPUT);

        let err = apply(Operation::First, &Input::Utf8(String::new())).unwrap_err();
        assert_eq!(exit_code(&err), INVALID_INPUT);
    }
}
