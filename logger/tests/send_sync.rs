//! Composition neither adds nor removes thread-safety.

use std::{cell::RefCell, io::Stdout, rc::Rc};

use logger::{
    FilteredEmitter, PrefixFilter,
    loggers::{collecting::CollectingEmitter, console::StreamEmitter, null::NullEmitter},
};
use static_assertions::{assert_impl_all, assert_not_impl_any};

#[test]
fn filtered_emitter_inherits_send_sync() {
    assert_impl_all!(FilteredEmitter<NullEmitter, PrefixFilter>: Send, Sync);
    assert_impl_all!(FilteredEmitter<CollectingEmitter, fn(&str) -> bool>: Send, Sync);
    assert_impl_all!(
        FilteredEmitter<FilteredEmitter<StreamEmitter<Stdout>, PrefixFilter>, PrefixFilter>: Send,
        Sync
    );
    assert_not_impl_any!(FilteredEmitter<StreamEmitter<Rc<RefCell<Vec<u8>>>>, PrefixFilter>: Send, Sync);
}
