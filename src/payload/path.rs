//! Location of a node inside a payload tree.

use std::fmt;

/// One step from a container to a child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Key(String),
    Index(usize),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Key(k) => f.write_str(k),
            Segment::Index(i) => write!(f, "{}", i),
        }
    }
}

/// Keys and indices from the root to a node. Displays dotted: `items.0.id`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    pub fn pop(&mut self) -> Option<Segment> {
        self.segments.pop()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_displays_empty() {
        assert_eq!(Path::root().to_string(), "");
        assert!(Path::root().is_root());
    }

    #[test]
    fn dotted_display() {
        let mut path = Path::root();
        path.push(Segment::Key("items".into()));
        path.push(Segment::Index(0));
        path.push(Segment::Key("id".into()));
        assert_eq!(path.to_string(), "items.0.id");

        assert_eq!(path.pop(), Some(Segment::Key("id".into())));
        assert_eq!(path.to_string(), "items.0");
        assert_eq!(path.segments().len(), 2);
    }
}
