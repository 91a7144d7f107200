use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::io::BufRead;
use std::path::Path;
use tracing::debug;

use crate::error::{Error, Result};
use crate::io::{ReadHrefModifier, modify_href};

/// An XML element with its attributes, text and child elements.
///
/// Supports the small subset of path queries the SAFE metadata needs:
/// `.//name` (or `name`) selects every descendant whose tag matches. A
/// prefixed name (`safe:orbitNumber`) must match the qualified tag exactly,
/// an unprefixed one matches on the local name only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct XmlElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub text: String,
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    /// Read and parse an XML file, applying `modifier` to the href first
    pub fn from_file<P: AsRef<Path>>(
        path: P,
        modifier: Option<&ReadHrefModifier>,
    ) -> Result<Self> {
        let href = modify_href(&path.as_ref().to_string_lossy(), modifier);
        debug!("Reading XML from {}", href);
        let reader = Reader::from_file(&href)?;
        Self::parse(reader)
    }

    pub fn parse_str(xml: &str) -> Result<Self> {
        Self::parse(Reader::from_str(xml))
    }

    fn parse<R: BufRead>(mut reader: Reader<R>) -> Result<Self> {
        reader.trim_text(true);
        let mut buf = Vec::new();
        let mut stack: Vec<XmlElement> = Vec::new();
        let mut root: Option<XmlElement> = None;

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(ref e) => stack.push(Self::from_start(e)?),
                Event::Empty(ref e) => {
                    let elem = Self::from_start(e)?;
                    Self::attach(&mut stack, &mut root, elem);
                }
                Event::End(_) => {
                    if let Some(elem) = stack.pop() {
                        Self::attach(&mut stack, &mut root, elem);
                    }
                }
                Event::Text(e) => {
                    if let Some(top) = stack.last_mut() {
                        top.text.push_str(&e.unescape()?);
                    }
                }
                Event::CData(e) => {
                    if let Some(top) = stack.last_mut() {
                        top.text.push_str(&String::from_utf8_lossy(&e));
                    }
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        if let Some(open) = stack.last() {
            return Err(Error::Parse(format!("unclosed element <{}>", open.name)));
        }
        root.ok_or_else(|| Error::Parse("document has no root element".to_string()))
    }

    fn from_start(e: &BytesStart<'_>) -> Result<Self> {
        let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
        let mut attributes = Vec::new();
        for attr in e.attributes() {
            let attr = attr.map_err(quick_xml::Error::InvalidAttr)?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).to_string();
            let value = attr.unescape_value()?.to_string();
            attributes.push((key, value));
        }
        Ok(XmlElement {
            name,
            attributes,
            text: String::new(),
            children: Vec::new(),
        })
    }

    fn attach(stack: &mut [XmlElement], root: &mut Option<XmlElement>, elem: XmlElement) {
        match stack.last_mut() {
            Some(parent) => parent.children.push(elem),
            None => {
                if root.is_none() {
                    *root = Some(elem);
                }
            }
        }
    }

    /// Tag name without its namespace prefix
    pub fn local_name(&self) -> &str {
        match self.name.split_once(':') {
            Some((_, local)) => local,
            None => &self.name,
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    fn matches(&self, query: &str) -> bool {
        if query.contains(':') {
            self.name == query
        } else {
            self.local_name() == query
        }
    }

    /// All descendants matching `query`, in document order
    pub fn find_all(&self, query: &str) -> Vec<&XmlElement> {
        let query = query.trim_start_matches(".//");
        let mut found = Vec::new();
        self.collect(query, &mut found);
        found
    }

    fn collect<'a>(&'a self, query: &str, found: &mut Vec<&'a XmlElement>) {
        for child in &self.children {
            if child.matches(query) {
                found.push(child);
            }
            child.collect(query, found);
        }
    }

    pub fn find(&self, query: &str) -> Option<&XmlElement> {
        self.find_all(query).into_iter().next()
    }

    /// Trimmed text of the first element matching `query`
    pub fn find_text_opt(&self, query: &str) -> Option<&str> {
        self.find(query).map(|e| e.text.trim())
    }

    pub fn find_text(&self, query: &str) -> Result<&str> {
        self.find_text_opt(query)
            .ok_or_else(|| Error::MissingField(query.trim_start_matches(".//").to_string()))
    }

    /// Parse the text of the first element matching `query`
    pub fn find_parsed<T>(&self, query: &str) -> Result<T>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        let text = self.find_text(query)?;
        text.parse::<T>()
            .map_err(|e| Error::Parse(format!("{} = {:?}: {}", query, text, e)))
    }
}
