use ignore::WalkBuilder;
use std::io;
use std::path::Path;

pub trait FileReader: Send + Sync {
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

pub struct StdFileReader;

impl FileReader for StdFileReader {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}

pub trait WalkerFactory: Send + Sync {
    fn build(&self, root: &Path) -> ignore::Walk;
}

/// Walks everything under the root: hidden entries included, ignore files not honored.
pub struct StdWalkerFactory;

impl WalkerFactory for StdWalkerFactory {
    fn build(&self, root: &Path) -> ignore::Walk {
        let mut wb = WalkBuilder::new(root);
        wb.standard_filters(false)
            .hidden(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b));
        wb.build()
    }
}
