use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::sync::OnceLock;

static INTERRUPTED: OnceLock<Arc<AtomicBool>> = OnceLock::new();

fn flag() -> &'static Arc<AtomicBool> {
    INTERRUPTED.get_or_init(|| Arc::new(AtomicBool::new(false)))
}

pub fn register_ctrlc() -> Result<(), ctrlc::Error> {
    let setter = Arc::clone(flag());
    ctrlc::set_handler(move || {
        setter.store(true, Ordering::SeqCst);
    })
}

/// True once Ctrl-C was pressed, or when `err` came from a Ctrl-C.
///
/// The overwrite prompt reads the terminal in raw mode, where Ctrl-C never
/// reaches the handler and surfaces as an `Interrupted` read error instead.
pub fn interrupted_by(err: Option<&anyhow::Error>) -> bool {
    flag().load(Ordering::SeqCst)
        || err.map_or(false, |err| {
            err.chain().any(|cause| {
                cause
                    .downcast_ref::<io::Error>()
                    .map_or(false, |io_err| io_err.kind() == io::ErrorKind::Interrupted)
            })
        })
}
