use std::{
    error::Error,
    fmt::Display,
    io::{self, BufRead, Seek},
    mem::swap,
};

use lazy_static::lazy_static;
use regex::Regex;
use smol_str::SmolStr;

use crate::format::{M3uAttribute, M3uItem, M3uPlaylist, M3uTag, M3uTagId, directives};

pub struct Parser(Box<dyn ParserImplTrait>);

impl Parser {
    pub fn new<T: BufRead + Seek + 'static>(reader: T) -> Self {
        Self(Box::new(ParserImpl::new(reader)))
    }

    pub fn parse(&mut self) -> Result<(), ParseError> {
        self.0.parse()
    }

    pub fn get_result(&mut self) -> M3uPlaylist {
        self.0.get_result()
    }
}

#[derive(Debug)]
pub enum ParseError {
    IoError(io::Error),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            Self::IoError(e) => e.fmt(f),
        }
    }
}
impl Error for ParseError {}
impl From<io::Error> for ParseError {
    fn from(value: io::Error) -> Self {
        Self::IoError(value)
    }
}

trait ParserImplTrait {
    fn parse(&mut self) -> Result<(), ParseError>;
    fn get_result(&mut self) -> M3uPlaylist;
}

lazy_static! {
    static ref ATTRIBUTE_REGEX: Regex =
        Regex::new(r#"([A-Za-z0-9_-]+)=("[^"]*"|[^",\s]*)"#).expect("Regular expression error");
}

fn parse_attribute_list(input: impl AsRef<str>) -> Vec<M3uAttribute> {
    let mut result = Vec::new();
    for (_, [key, value]) in ATTRIBUTE_REGEX
        .captures_iter(input.as_ref())
        .map(|x| x.extract())
    {
        result.push(M3uAttribute {
            key: key.into(),
            value: value.trim_matches('"').into(),
        });
    }

    result
}

struct ParserImpl<T: BufRead + Seek + 'static> {
    reader: T,
    buffer: String,
    playlist: M3uPlaylist,
}

impl<T: BufRead + Seek + 'static> ParserImpl<T> {
    pub fn new(reader: T) -> Self {
        Self {
            reader,
            buffer: String::new(),
            playlist: M3uPlaylist::default(),
        }
    }

    fn next_line(&mut self) -> Result<Option<String>, io::Error> {
        loop {
            self.buffer.clear();
            match self.reader.read_line(&mut self.buffer) {
                Ok(0) => return Ok(None),
                Ok(_) => {}
                Err(e) => return Err(e),
            }

            if self.buffer.trim().len() != 0 {
                return Ok(Some(self.buffer.trim().to_owned()));
            }
        }
    }

    fn parse_directive(&mut self, line: String) {
        let mut splited_line = line.splitn(2, ':');
        let mut name = splited_line.next().unwrap_or_default();
        let value = splited_line.next();

        // an attribute list may also follow the name directly, space
        // separated, as on a `#EXTM3U x-key="..."` header line
        let mut header_attributes = None;
        if let Some(position) = name.find(char::is_whitespace) {
            header_attributes = Some(name[position..].trim_start());
            name = &name[..position];
        }

        let attribute_source = value.or(header_attributes).unwrap_or_default();

        self.playlist.items.push(M3uItem::Tag(M3uTag {
            id: M3uTagId::from_directive(name),
            name: name.into(),
            value: value.map(|x| x.into()),
            attributes: parse_attribute_list(attribute_source),
        }));
    }
}

impl<T: BufRead + Seek + 'static> ParserImplTrait for ParserImpl<T> {
    fn parse(&mut self) -> Result<(), ParseError> {
        while let Some(line) = self.next_line()? {
            if line.starts_with(directives::TAG_PREFIX) {
                // directive
                self.parse_directive(line);
            } else {
                // content line, e.g. a segment location
                self.playlist.items.push(M3uItem::Line(SmolStr::new(line)));
            }
        }

        Ok(())
    }

    fn get_result(&mut self) -> M3uPlaylist {
        let mut result = M3uPlaylist::default();
        swap(&mut self.playlist, &mut result);
        result
    }
}
