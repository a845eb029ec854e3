//! Property tests for input copying.

use proptest::prelude::*;

use idlc::infrastructure::fs::{copy_stream, FileCopier, CHUNK_SIZE};
use idlc::infrastructure::TempFileAllocator;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The destination holds exactly the source bytes, whatever
    /// their length relative to the chunk size.
    #[test]
    fn property_copy_is_byte_exact(
        data in proptest::collection::vec(any::<u8>(), 0..(CHUNK_SIZE * 4))
    ) {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("in.idl");
        let destination = dir.path().join("out");
        std::fs::write(&source, &data).unwrap();

        let copied = FileCopier::new().copy(Some(&source), &destination).unwrap();

        prop_assert_eq!(copied, data.len() as u64);
        prop_assert_eq!(std::fs::read(&destination).unwrap(), data);
    }

    /// PROPERTY: Streaming copies ignore how the reader splits its input.
    #[test]
    fn property_copy_stream_handles_short_reads(
        data in proptest::collection::vec(any::<u8>(), 0..2048),
        step in 1usize..700,
    ) {
        let mut reader = ShortReader { data: &data, step };
        let mut out = Vec::new();

        let copied = copy_stream(&mut reader, &mut out).unwrap();

        prop_assert_eq!(copied, data.len() as u64);
        prop_assert_eq!(out, data);
    }

    /// PROPERTY: Allocated names carry the prefix and are never handed out twice.
    #[test]
    fn property_allocated_names_are_unique(count in 1usize..16) {
        let dir = tempfile::tempdir().unwrap();
        let allocator = TempFileAllocator::new(dir.path());

        let files: Vec<_> = (0..count).map(|_| allocator.allocate("idli_").unwrap()).collect();
        let mut names: Vec<_> = files.iter().map(|f| f.path().to_path_buf()).collect();
        names.sort();
        names.dedup();

        prop_assert_eq!(names.len(), count);
        for name in &names {
            let file_name = name.file_name().unwrap().to_string_lossy();
            prop_assert!(file_name.starts_with("idli_"));
        }
    }
}

#[test]
fn copy_boundary_sizes() {
    for size in [0, 1, CHUNK_SIZE, CHUNK_SIZE + 1] {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("in.idl");
        let destination = dir.path().join("out");
        let data: Vec<u8> = (0..size).map(|i| (i % 251) as u8).collect();
        std::fs::write(&source, &data).unwrap();

        FileCopier::new().copy(Some(&source), &destination).unwrap();

        assert_eq!(std::fs::read(&destination).unwrap(), data, "size {size}");
    }
}

struct ShortReader<'a> {
    data: &'a [u8],
    step: usize,
}

impl std::io::Read for ShortReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let n = self.step.min(buf.len()).min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}
