//! Interactive menu loop.
//!
//! A thin dispatcher: prints the numbered menu, reads one line per prompt,
//! calls the matching operation and prints the structured result or a fixed
//! error line. Holds no state between iterations. Generic over
//! `BufRead`/`Write` so tests can script a session.

use crate::output;
use crate::processing;
use colored::Colorize;
use std::io::{self, BufRead, Write};

const INVALID_ADDRESS_MSG: &str = "Invalid IP address format. Please enter a valid IP address.";
const INVALID_SUBNET_MSG: &str = "Invalid subnet format. Please enter a valid subnet.";
const INVALID_CIDR_MSG: &str = "Invalid CIDR notation. Please enter a valid number.";
const INVALID_ADDRESS_OR_MASK_MSG: &str =
    "Invalid IP address or subnet mask format. Please enter valid values.";
const INVALID_MASK_MSG: &str = "Invalid subnet mask format. Please enter a valid value.";
const INVALID_PREFIX_MSG: &str = "Invalid prefix value. Please enter a number between 0 and 32.";
const INVALID_CHOICE_MSG: &str = "Invalid choice. Please select 1, 2, 3, 4, 5, 6, or 7.";

fn write_menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\nOptions:")?;
    writeln!(out, "1. Convert IP address to binary")?;
    writeln!(out, "2. Calculate subnet information")?;
    writeln!(out, "3. Convert CIDR notation to subnet mask")?;
    writeln!(out, "4. Calculate network and broadcast addresses")?;
    writeln!(out, "5. Calculate subnets from a larger network")?;
    writeln!(
        out,
        "6. Calculate block size and number of subnets for a given subnet mask"
    )?;
    writeln!(out, "7. Exit")?;
    Ok(())
}

/// Print `text` without a newline and read one trimmed input line.
/// Returns `None` on end of input.
fn prompt(
    input: &mut impl BufRead,
    output: &mut impl Write,
    text: &str,
) -> io::Result<Option<String>> {
    write!(output, "{text}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Run the menu loop until the user exits or input ends.
pub fn run(input: &mut impl BufRead, output: &mut impl Write) -> io::Result<()> {
    output::write_banner(output)?;
    loop {
        write_menu(output)?;
        let Some(choice) = prompt(input, output, "Choose an option (1-7): ")? else {
            break;
        };
        log::debug!("menu choice: {choice:?}");

        match choice.as_str() {
            "1" => {
                let Some(ip) = prompt(input, output, "Enter IP address (e.g., 192.168.1.1): ")?
                else {
                    break;
                };
                match processing::ip_to_binary(&ip) {
                    Ok(binary) => {
                        writeln!(output, "Binary representation of {ip} is {binary}")?;
                    }
                    Err(e) => {
                        log::warn!("ip_to_binary({ip:?}): {e}");
                        writeln!(output, "{}", INVALID_ADDRESS_MSG.red())?;
                    }
                }
            }

            "2" => {
                let Some(subnet) = prompt(input, output, "Enter subnet (e.g., 192.168.1.0/24): ")?
                else {
                    break;
                };
                match processing::subnet_info(&subnet) {
                    Ok(report) => output::write_subnet_report(output, &report)?,
                    Err(e) => {
                        log::warn!("subnet_info({subnet:?}): {e}");
                        writeln!(output, "{}", INVALID_SUBNET_MSG.red())?;
                    }
                }
            }

            "3" => {
                let Some(cidr) = prompt(input, output, "Enter CIDR notation (e.g., 24): ")? else {
                    break;
                };
                match cidr.parse::<u8>().ok().map(processing::cidr_to_mask) {
                    Some(Ok(mask)) => {
                        writeln!(output, "Subnet mask for /{cidr} is {mask}")?;
                    }
                    _ => {
                        log::warn!("cidr_to_mask({cidr:?}) failed");
                        writeln!(output, "{}", INVALID_CIDR_MSG.red())?;
                    }
                }
            }

            "4" => {
                let Some(ip) = prompt(input, output, "Enter IP address (e.g., 192.168.1.10): ")?
                else {
                    break;
                };
                let Some(mask) =
                    prompt(input, output, "Enter subnet mask (e.g., 255.255.255.0): ")?
                else {
                    break;
                };
                match processing::network_and_broadcast(&ip, &mask) {
                    Ok(report) => output::write_network_report(output, &report)?,
                    Err(e) => {
                        log::warn!("network_and_broadcast({ip:?}, {mask:?}): {e}");
                        writeln!(output, "{}", INVALID_ADDRESS_OR_MASK_MSG.red())?;
                    }
                }
            }

            "5" => {
                let Some(network) =
                    prompt(input, output, "Enter the network (e.g., 172.16.0.0/16): ")?
                else {
                    break;
                };
                let Some(new_prefix) = prompt(input, output, "Enter new prefix (e.g., 20): ")?
                else {
                    break;
                };
                let Ok(prefix) = new_prefix.parse::<u8>() else {
                    writeln!(output, "{}", INVALID_PREFIX_MSG.red())?;
                    continue;
                };
                match processing::calculate_subnets(&network, prefix) {
                    Ok(report) => output::write_subdivision(output, &report)?,
                    Err(e) => {
                        log::warn!("calculate_subnets({network:?}, /{prefix}): {e}");
                        writeln!(output, "{}", e.to_string().red())?;
                    }
                }
            }

            "6" => {
                let Some(mask) = prompt(input, output, "Enter subnet mask (e.g., 29): ")? else {
                    break;
                };
                match mask.parse::<u8>().ok().map(processing::block_size_and_subnets) {
                    Some(Ok(report)) => output::write_block_report(output, &report)?,
                    _ => {
                        log::warn!("block_size_and_subnets({mask:?}) failed");
                        writeln!(output, "{}", INVALID_MASK_MSG.red())?;
                    }
                }
            }

            "7" => {
                writeln!(output, "Exiting...")?;
                break;
            }

            _ => {
                writeln!(output, "{INVALID_CHOICE_MSG}")?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_session(script: &str) -> String {
        colored::control::set_override(false);
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        run(&mut input, &mut output).expect("menu loop failed");
        String::from_utf8(output).expect("menu output not utf8")
    }

    #[test]
    fn test_binary_option() {
        let out = run_session("1\n192.168.1.1\n7\n");
        assert!(out
            .contains("Binary representation of 192.168.1.1 is 11000000.10101000.00000001.00000001"));
        assert!(out.contains("Exiting..."));
    }

    #[test]
    fn test_binary_option_invalid_then_continues() {
        let out = run_session("1\nnot-an-ip\n7\n");
        assert!(out.contains(INVALID_ADDRESS_MSG));
        // loop re-prompts after the error
        assert!(out.contains("Exiting..."));
    }

    #[test]
    fn test_subnet_info_option() {
        let out = run_session("2\n192.168.1.0/24\n7\n");
        assert!(out.contains("Network Address: 192.168.1.0"));
        assert!(out.contains("Broadcast Address: 192.168.1.255"));
        assert!(out.contains("Total Number of IP Addresses: 256"));
        assert!(out.contains("Number of Usable IP Addresses: 254"));
    }

    #[test]
    fn test_cidr_to_mask_option() {
        let out = run_session("3\n24\n7\n");
        assert!(out.contains("Subnet mask for /24 is 255.255.255.0"));

        let out = run_session("3\nforty\n7\n");
        assert!(out.contains(INVALID_CIDR_MSG));
    }

    #[test]
    fn test_network_and_broadcast_option() {
        let out = run_session("4\n192.168.1.10\n255.255.255.0\n7\n");
        assert!(out.contains("Network Address: 192.168.1.0"));
        assert!(out.contains("Broadcast Address: 192.168.1.255"));
    }

    #[test]
    fn test_subdivision_option() {
        let out = run_session("5\n172.16.0.0/16\n20\n7\n");
        assert!(out.contains("Number of Subnets: 16"));
        assert!(out.contains("172.16.0.0/20"));
        assert!(out.contains("Range: 172.16.0.1 to 172.16.15.254"));
        assert!(out.contains("Broadcast: 172.16.15.255"));
    }

    #[test]
    fn test_subdivision_option_rejects_equal_prefix() {
        let out = run_session("5\n192.168.1.0/24\n24\n7\n");
        assert!(out.contains("new prefix /24 must be greater than the original prefix /24"));
    }

    #[test]
    fn test_subdivision_option_rejects_non_numeric_prefix() {
        let out = run_session("5\n172.16.0.0/16\ntwenty\n7\n");
        assert!(out.contains(INVALID_PREFIX_MSG));
    }

    #[test]
    fn test_block_size_option() {
        let out = run_session("6\n29\n7\n");
        assert!(out.contains("Block Size: 8 IP addresses"));
        assert!(out.contains("Number of Subnets: 8"));
    }

    #[test]
    fn test_unknown_choice_reprompts() {
        let out = run_session("9\n7\n");
        assert!(out.contains(INVALID_CHOICE_MSG));
        assert!(out.contains("Exiting..."));
    }

    #[test]
    fn test_eof_ends_session() {
        let out = run_session("1\n");
        // input ends mid-prompt; the loop exits without panicking
        assert!(out.contains("Enter IP address"));
    }
}
