//! Output plumbing shared by the commands

use derive_new::new;
use minus::Pager;
use std::io::{self, Write};

/// Repository writer that feeds the `minus` pager
///
/// `log` is built with this writer instead of stdout when it runs on a
/// terminal and `NO_PAGER` is unset:
///
/// ```ignore
/// let pager = Pager::new();
/// let repository =
///     Repository::with_config(&pwd, Box::new(PagerWriter::new(pager.clone())), config)?;
/// repository.log()?;
/// minus::page_all(pager)?;
/// ```
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.pager
            .push_str(String::from_utf8_lossy(buf))
            .map_err(io::Error::other)?;
        Ok(buf.len())
    }

    // the pager renders everything once `page_all` runs
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
