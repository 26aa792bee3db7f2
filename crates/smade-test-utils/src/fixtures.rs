//! Reusable fixtures for codec and record tests.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use indexmap::IndexMap;
use smade_tag::{Payload, Tag, TagKind, TagList, TagRoot, TagStruct};

static SCRATCH_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// A root tag whose tree uses every payload kind at least once, including
/// a list of structs and a struct holding a list.
///
/// Kind 0 appears as the sentinel that terminates each struct on the wire.
pub fn every_kind_tree() -> TagRoot {
    let cell = |x: i32| -> TagStruct {
        vec![
            Tag::named("pos", Payload::IntVec3([x, -x, 2 * x])),
            Tag::unnamed(Payload::ByteVec3([1, -2, 3])),
        ]
        .into()
    };

    let cells = TagList::from_payloads(
        TagKind::Struct,
        [Payload::Struct(cell(1)), Payload::Struct(cell(-4))],
    )
    .expect("homogeneous struct list");

    let scalars = TagList::from_payloads(TagKind::Short, [Payload::Short(-1), Payload::Short(300)])
        .expect("homogeneous short list");

    let nested_lists = TagList::from_payloads(
        TagKind::List,
        [
            Payload::List(TagList::new(TagKind::Double)),
            Payload::List(
                TagList::from_payloads(TagKind::Long, [Payload::Long(i64::MIN)])
                    .expect("homogeneous long list"),
            ),
        ],
    )
    .expect("homogeneous list of lists");

    let inventory: TagStruct = vec![
        Tag::named("slots", scalars),
        Tag::unnamed(Payload::Float(0.25)),
    ]
    .into();

    let root: TagStruct = vec![
        Tag::named("flag", Payload::Byte(-7)),
        Tag::named("power", Payload::Int(123_456)),
        Tag::named("uid", Payload::Long(0x0123_4567_89AB_CDEF)),
        Tag::named("ratio", Payload::Double(-2.5)),
        Tag::named("blob", Payload::ByteArray(vec![0x00, 0xFF, 0x80])),
        Tag::named("label", Payload::String("Isanth VI".into())),
        Tag::named("dir", Payload::FloatVec3([0.0, 1.0, -1.0])),
        Tag::named("cells", cells),
        Tag::named("inventory", inventory),
        Tag::named("nested", nested_lists),
        Tag::unnamed(Payload::Registration(0xEE)),
        Tag::named("rot", Payload::FloatVec4([0.0, 0.0, 0.0, 1.0])),
    ]
    .into();

    TagRoot::new(Tag::named("root", root))
}

/// Block-count table with ids deliberately out of ascending order.
pub fn sample_elements() -> IndexMap<u16, u32> {
    [(7, 800), (13, 900), (3, 42)].into_iter().collect()
}

/// A unique directory under the system temp dir, removed on drop.
pub struct ScratchDir {
    path: PathBuf,
}

impl ScratchDir {
    pub fn new(label: &str) -> Self {
        let n = SCRATCH_COUNTER.fetch_add(1, Ordering::Relaxed);
        let path = std::env::temp_dir().join(format!(
            "smade-{label}-{}-{n}",
            std::process::id()
        ));
        std::fs::create_dir_all(&path).expect("create scratch dir");
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn join(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}
