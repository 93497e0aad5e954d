use std::io::Write;

use inistore::{Document, LookupError};

use super::error::CliError;
use super::types::{Args, Command};

impl Args {
    pub fn execute(&self, out: &mut impl Write) -> Result<(), CliError> {
        let options = self.store_options();

        match &self.command {
            Command::Get { file, section, key } => {
                let value = inistore::get_value_with(file, section, key, &options.parse)?;
                writeln!(out, "{value}")?;
            }
            Command::Set {
                file,
                section,
                key,
                value,
            } => {
                inistore::modify_key_with(file, section, key, value, &options)?;
            }
            Command::Dump { file, section } => {
                let doc = inistore::read_with(file, &options.parse)?;
                let doc = match section {
                    Some(name) => select_section(doc, name)?,
                    None => doc,
                };
                out.write_all(inistore::write_ini(&doc, &options.write).as_bytes())?;
            }
            Command::Sections { file } => {
                let doc = inistore::read_with(file, &options.parse)?;
                for section in doc.sections() {
                    writeln!(out, "{}", section.name())?;
                }
            }
        }

        Ok(())
    }
}

fn select_section(mut doc: Document, name: &str) -> Result<Document, inistore::Error> {
    let section = doc
        .remove_section(name)
        .ok_or_else(|| LookupError::SectionNotFound {
            section: name.to_string(),
        })?;
    Ok(Document::from_iter([section]))
}
