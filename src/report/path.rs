use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PathElem {
    Field(&'static str),
    Index(usize),
}

/// Location of a value inside a document, rendered as `$.field[index].field`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct JsonPath {
    elems: Vec<PathElem>,
}

impl JsonPath {
    pub(crate) fn root() -> Self {
        Self::default()
    }

    pub(crate) fn field(&self, name: &'static str) -> Self {
        let mut elems = self.elems.clone();
        elems.push(PathElem::Field(name));
        Self { elems }
    }

    /// Path of entry `i` of the list stored under `name`.
    pub(crate) fn item(&self, name: &'static str, i: usize) -> Self {
        let mut elems = self.elems.clone();
        elems.push(PathElem::Field(name));
        elems.push(PathElem::Index(i));
        Self { elems }
    }
}

impl fmt::Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for p in &self.elems {
            match *p {
                PathElem::Field(name) => write!(f, ".{name}")?,
                PathElem::Index(i) => write!(f, "[{i}]")?,
            }
        }
        Ok(())
    }
}

/// Render a JSON Pointer (`/rnaComplexes/0/name`) in the same `$.a[0].b` form used for
/// semantic violations. All-digit segments are read as array indices.
pub(crate) fn pointer_to_location(pointer: &str) -> String {
    let mut s = String::from("$");
    for raw in pointer.split('/').skip(1) {
        let seg = raw.replace("~1", "/").replace("~0", "~");
        if !seg.is_empty() && seg.bytes().all(|b| b.is_ascii_digit()) {
            s.push('[');
            s.push_str(&seg);
            s.push(']');
        } else {
            s.push('.');
            s.push_str(&seg);
        }
    }
    s
}
