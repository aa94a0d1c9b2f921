//! Cockatrice card database document and its XML serialization

use crate::card::Card;
use crate::error::{Error, Result};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// File name the database is written to
pub const OUTPUT_FILE_NAME: &str = "cards.xml";

/// Schema version written on the root element
pub const DATABASE_VERSION: &str = "3";

const ROOT_ELEMENT: &str = "cockatrice_carddatabase";

/// An ordered collection of cards, serialized as a Cockatrice `cards.xml`
#[derive(Debug, Clone, Default)]
pub struct CardDatabase {
    pub cards: Vec<Card>,
}

impl CardDatabase {
    /// Create an empty database
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a card after all existing ones
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Get the number of cards
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the database has no cards
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Serialize the whole document to `out`
    pub fn write_xml<W: Write>(&self, out: W) -> Result<()> {
        let mut writer = Writer::new_with_indent(out, b' ', 2);

        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        writer.write_event(Event::Start(
            BytesStart::new(ROOT_ELEMENT).with_attributes([("version", DATABASE_VERSION)]),
        ))?;
        writer.write_event(Event::Start(BytesStart::new("cards")))?;

        for card in &self.cards {
            write_card(&mut writer, card)?;
        }

        writer.write_event(Event::End(BytesEnd::new("cards")))?;
        writer.write_event(Event::End(BytesEnd::new(ROOT_ELEMENT)))?;
        writer.get_mut().write_all(b"\n")?;

        Ok(())
    }

    /// Render the document to a string
    pub fn to_xml_string(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.write_xml(&mut buf)?;
        String::from_utf8(buf)
            .map_err(|e| Error::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
    }

    /// Write the document to `path`, replacing any existing file.
    ///
    /// The document is rendered in memory first, so a serialization failure
    /// never leaves a truncated file behind.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut buf = Vec::new();
        self.write_xml(&mut buf)?;
        fs::write(path, buf)?;
        Ok(())
    }
}

fn write_card<W: Write>(writer: &mut Writer<W>, card: &Card) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new("card")))?;

    write_element(writer, BytesStart::new("name"), &card.name)?;
    write_element(
        writer,
        BytesStart::new("set").with_attributes([("picURL", card.pic_url.as_str())]),
        &card.set,
    )?;
    write_element(writer, BytesStart::new("manacost"), &card.manacost)?;
    write_element(writer, BytesStart::new("cmc"), &card.cmc)?;
    write_element(writer, BytesStart::new("type"), &card.card_type)?;
    write_element(
        writer,
        BytesStart::new("pt"),
        card.pt.as_deref().unwrap_or_default(),
    )?;
    write_element(
        writer,
        BytesStart::new("tablerow"),
        &card.tablerow.to_string(),
    )?;
    write_element(writer, BytesStart::new("text"), &card.text)?;

    writer.write_event(Event::End(BytesEnd::new("card")))?;
    Ok(())
}

/// Write `<tag>text</tag>`, or `<tag/>` when the text is empty
fn write_element<W: Write>(
    writer: &mut Writer<W>,
    start: BytesStart<'_>,
    text: &str,
) -> Result<()> {
    if text.is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    let end = start.to_end().into_owned();
    writer.write_event(Event::Start(start))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(end))?;
    Ok(())
}
