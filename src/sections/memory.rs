use super::*;

#[derive(Clone, Debug, Default)]
pub struct MemorySection {
    memories: Vec<MemoryType>,
}

impl MemorySection {
    pub fn push(&mut self, mem_type: MemoryType) -> u32 {
        self.memories.push(mem_type);
        self.memories.len() as u32 - 1
    }

    pub fn len(&self) -> u32 {
        self.memories.len() as u32
    }
}

impl Section for MemorySection {
    fn id(&self) -> SectionId {
        SectionId::Memory
    }

    fn is_empty(&self) -> bool {
        self.memories.is_empty()
    }

    fn encode_payload(&self, w: &mut Sink) {
        self.memories.encode(w);
    }
}
