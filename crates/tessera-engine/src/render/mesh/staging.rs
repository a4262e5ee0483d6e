/// CPU-side vertex staging area.
///
/// Capacity is explicit and only ever doubles; the write cursor is reset each
/// frame while the allocation is kept. An unallocated buffer has capacity 0.
#[derive(Debug, Default)]
pub(crate) struct StagingBuffer {
    bytes: Box<[u8]>,
    position: usize,
}

impl StagingBuffer {
    #[inline]
    pub(crate) fn is_allocated(&self) -> bool {
        !self.bytes.is_empty()
    }

    /// Allocates `capacity` bytes if nothing is allocated yet.
    pub(crate) fn ensure_allocated(&mut self, capacity: usize) {
        if !self.is_allocated() {
            self.bytes = vec![0u8; capacity].into_boxed_slice();
            self.position = 0;
        }
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub(crate) fn position(&self) -> usize {
        self.position
    }

    #[inline]
    pub(crate) fn written(&self) -> &[u8] {
        &self.bytes[..self.position]
    }

    #[inline]
    pub(crate) fn rewind(&mut self) {
        self.position = 0;
    }

    /// Doubles capacity until `additional` more bytes fit.
    ///
    /// Returns `true` if a reallocation happened. The written prefix is copied
    /// into the new allocation unchanged.
    pub(crate) fn reserve(&mut self, additional: usize) -> bool {
        let needed = self.position + additional;
        if needed <= self.capacity() {
            return false;
        }

        let mut new_cap = self.capacity().max(1);
        while new_cap < needed {
            new_cap *= 2;
        }

        let mut grown = vec![0u8; new_cap].into_boxed_slice();
        grown[..self.position].copy_from_slice(&self.bytes[..self.position]);
        self.bytes = grown;
        true
    }

    /// Appends bytes; the caller must have reserved room.
    #[inline]
    pub(crate) fn put(&mut self, data: &[u8]) {
        let end = self.position + data.len();
        self.bytes[self.position..end].copy_from_slice(data);
        self.position = end;
    }

    #[inline]
    pub(crate) fn put_f32(&mut self, v: f32) {
        self.put(&v.to_le_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unallocated_by_default() {
        let s = StagingBuffer::default();
        assert!(!s.is_allocated());
        assert_eq!(s.capacity(), 0);
    }

    #[test]
    fn ensure_allocated_is_idempotent() {
        let mut s = StagingBuffer::default();
        s.ensure_allocated(64);
        s.put(&[1, 2, 3]);
        s.ensure_allocated(128);
        assert_eq!(s.capacity(), 64);
        assert_eq!(s.written(), &[1, 2, 3]);
    }

    #[test]
    fn growth_doubles_and_preserves_prefix() {
        let mut s = StagingBuffer::default();
        s.ensure_allocated(4);
        s.put(&[9, 8, 7, 6]);
        assert!(s.reserve(1));
        assert_eq!(s.capacity(), 8);
        assert_eq!(s.written(), &[9, 8, 7, 6]);

        assert!(s.reserve(20));
        assert_eq!(s.capacity(), 32);
        assert!(!s.reserve(4));
    }

    #[test]
    fn f32_is_little_endian() {
        let mut s = StagingBuffer::default();
        s.ensure_allocated(4);
        s.put_f32(1.0);
        assert_eq!(s.written(), &[0x00, 0x00, 0x80, 0x3F]);
    }

    #[test]
    fn rewind_keeps_capacity() {
        let mut s = StagingBuffer::default();
        s.ensure_allocated(8);
        s.reserve(16);
        s.put(&[0; 12]);
        s.rewind();
        assert_eq!(s.position(), 0);
        assert_eq!(s.capacity(), 16);
    }
}
