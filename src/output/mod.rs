//! Output formatting for calculator reports.

mod terminal;

pub use terminal::{
    format_field, write_banner, write_block_report, write_network_report, write_subdivision,
    write_subnet_report,
};
