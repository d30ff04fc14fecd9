use std::fmt::Display;

use crate::format::{M3uItem, M3uPlaylist, M3uTag};

impl Display for M3uPlaylist {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for it in self.items.iter() {
            match it {
                M3uItem::Tag(tag) => writeln!(f, "{}", tag)?,
                M3uItem::Line(line) => writeln!(f, "{}", line)?,
            }
        }

        Ok(())
    }
}

impl Display for M3uTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)?;

        if let Some(value) = self.value.as_ref() {
            // value kept verbatim, attributes are derived from it
            write!(f, ":{}", value)?;
        } else {
            // header-style attribute list, space separated after the name
            for attribute in self.attributes.iter() {
                write!(f, " {}=\"{}\"", attribute.key, attribute.value)?;
            }
        }

        Ok(())
    }
}
