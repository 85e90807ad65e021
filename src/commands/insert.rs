//! Insert subcommand handler

use anyhow::{Context, Result};

use mathpad::input::{insert_text_at_cursor, Selection, TextControl, TextField};

/// Arguments of `mathpad insert`.
#[derive(Debug, Clone)]
pub struct InsertArgs {
    pub text: String,
    pub value: String,
    pub selection: Option<Selection>,
    pub read_only: bool,
    pub plain: bool,
}

/// Insert into a field built from the arguments and print the outcome.
pub fn handle(args: &InsertArgs) -> Result<()> {
    let mut field = TextField::with_value(args.value.as_str()).read_only(args.read_only);
    if let Some(selection) = args.selection {
        field.set_selection(selection);
    }

    let outcome =
        insert_text_at_cursor(&mut field, &args.text).context("Cannot insert text into field")?;

    if args.plain {
        println!("{}", outcome.value);
    } else {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    }
    Ok(())
}
