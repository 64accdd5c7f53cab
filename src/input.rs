//! Reading the address and mask from arguments or interactive prompts.

use std::error::Error;
use std::io::{BufRead, Write};

/// The two raw input strings, trimmed but not yet validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawInput {
    pub address: String,
    pub mask: String,
}

/// Take the inputs from `args` when both are given, otherwise prompt for them.
///
/// # Arguments
/// * `args` - Command line arguments after the program name
/// * `input` - Where prompted lines are read from
/// * `prompt` - Where the prompts are written
pub fn read_inputs<R, W>(args: &[String], input: R, prompt: W) -> Result<RawInput, Box<dyn Error>>
where
    R: BufRead,
    W: Write,
{
    match args {
        [address, mask] => {
            log::debug!("Using inputs from arguments");
            Ok(RawInput {
                address: address.trim().to_string(),
                mask: mask.trim().to_string(),
            })
        }
        [] => prompt_inputs(input, prompt),
        _ => Err(format!(
            "Expected an IP address and a subnet mask, got {} argument(s)",
            args.len()
        )
        .into()),
    }
}

fn prompt_inputs<R, W>(mut input: R, mut prompt: W) -> Result<RawInput, Box<dyn Error>>
where
    R: BufRead,
    W: Write,
{
    let address = prompt_line(&mut input, &mut prompt, "Enter IP address: ")?;
    let mask = prompt_line(&mut input, &mut prompt, "Enter subnet mask: ")?;
    Ok(RawInput { address, mask })
}

fn prompt_line<R, W>(input: &mut R, prompt: &mut W, text: &str) -> Result<String, Box<dyn Error>>
where
    R: BufRead,
    W: Write,
{
    write!(prompt, "{text}")?;
    prompt.flush()?;

    let mut line = String::new();
    let read = input.read_line(&mut line)?;
    if read == 0 {
        return Err(format!("No input for '{}'", text.trim_end_matches(": ")).into());
    }
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_inputs_from_args() {
        let args = vec!["10.0.0.5".to_string(), " 255.0.0.0\n".to_string()];
        let mut prompt = Vec::new();
        let raw = read_inputs(&args, Cursor::new(""), &mut prompt).unwrap();
        assert_eq!(raw.address, "10.0.0.5");
        assert_eq!(raw.mask, "255.0.0.0");
        assert!(prompt.is_empty(), "No prompts when arguments are given");
    }

    #[test]
    fn test_read_inputs_prompted() {
        let mut prompt = Vec::new();
        let raw = read_inputs(
            &[],
            Cursor::new("192.168.1.10\r\n255.255.255.0\n"),
            &mut prompt,
        )
        .unwrap();
        assert_eq!(
            raw,
            RawInput {
                address: "192.168.1.10".to_string(),
                mask: "255.255.255.0".to_string()
            }
        );
        assert_eq!(
            String::from_utf8(prompt).unwrap(),
            "Enter IP address: Enter subnet mask: "
        );
    }

    #[test]
    fn test_read_inputs_missing_line() {
        let err = read_inputs(&[], Cursor::new("192.168.1.10\n"), Vec::new()).unwrap_err();
        assert_eq!(err.to_string(), "No input for 'Enter subnet mask'");
    }

    #[test]
    fn test_read_inputs_wrong_arg_count() {
        let args = vec!["10.0.0.5".to_string()];
        assert!(read_inputs(&args, Cursor::new(""), Vec::new()).is_err());
    }
}
