use super::*;

pub use self::custom::*;
pub use self::data::*;
pub use self::element::*;
pub use self::export::*;
pub use self::function::*;
pub use self::global::*;
pub use self::import::*;
pub use self::memory::*;
pub use self::table::*;
pub use self::tag::*;

mod custom;
mod data;
mod element;
mod export;
mod function;
mod global;
mod import;
mod memory;
mod table;
mod tag;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Custom = 0,
    Type = 1,
    Import = 2,
    Function = 3,
    Table = 4,
    Memory = 5,
    Global = 6,
    Export = 7,
    Start = 8,
    Element = 9,
    Code = 10,
    Data = 11,
    DataCount = 12,
    Tag = 13,
}

impl From<SectionId> for u8 {
    fn from(id: SectionId) -> u8 {
        id as u8
    }
}

/// Something that is written out as one section of a module.
pub trait Section {
    fn id(&self) -> SectionId;

    /// Empty sections are left out of the module entirely.
    fn is_empty(&self) -> bool;

    /// Writes the section contents, without the id and size.
    fn encode_payload(&self, w: &mut Sink);
}

pub fn encode_section<S: Section + ?Sized>(section: &S, w: &mut Sink) {
    w.write_u8(section.id().into());
    w.write_length_prefixed(|scratch| section.encode_payload(scratch));
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StartSection(pub Option<FuncIdx>);

impl Section for StartSection {
    fn id(&self) -> SectionId {
        SectionId::Start
    }

    fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    fn encode_payload(&self, w: &mut Sink) {
        if let Some(func_idx) = self.0 {
            func_idx.encode(w);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn section_framing() {
        let mut sink = Sink::new();
        encode_section(&StartSection(Some(FuncIdx(200))), &mut sink);
        assert_eq!(sink.into_bytes(), vec![0x08, 0x02, 0xc8, 0x01]);
    }

    #[test]
    fn ids_match_binary_format() {
        assert_eq!(u8::from(SectionId::DataCount), 12);
        assert_eq!(u8::from(SectionId::Tag), 13);
        assert_eq!(u8::from(SectionId::Custom), 0);
    }
}
