use super::DataStore;
use crate::error::{InvError, Result};
use crate::model::ProductMap;
use std::fs;
use std::path::{Path, PathBuf};

pub struct FileStore {
    data_file: PathBuf,
}

impl FileStore {
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.data_file
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.data_file.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(InvError::Io)?;
            }
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<ProductMap> {
        if !self.data_file.exists() {
            return Ok(ProductMap::new());
        }
        let content = fs::read_to_string(&self.data_file).map_err(InvError::Io)?;
        let products: ProductMap =
            serde_json::from_str(&content).map_err(InvError::Serialization)?;
        Ok(products)
    }

    fn save(&mut self, products: &ProductMap) -> Result<()> {
        self.ensure_parent_dir()?;
        let content = serde_json::to_string_pretty(products).map_err(InvError::Serialization)?;
        fs::write(&self.data_file, content).map_err(InvError::Io)?;
        Ok(())
    }

    fn location(&self) -> String {
        self.data_file.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Product;

    fn sample_map() -> ProductMap {
        let mut map = ProductMap::new();
        for (name, sku) in [("Hammer", "H1"), ("Anvil", "A1")] {
            let product = Product::new(name, sku, 9.99, 4).unwrap();
            map.insert(sku.to_string(), product.to_record());
        }
        map
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nothing.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_creates_parent_dirs_and_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("inventory.json");
        let mut store = FileStore::new(&path);

        store.save(&sample_map()).unwrap();
        assert!(path.exists());
        assert_eq!(store.load().unwrap(), sample_map());
    }

    #[test]
    fn writes_pretty_printed_object() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        let mut store = FileStore::new(&path);
        store.save(&sample_map()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("{\n  \"H1\": {\n    \"name\": \"Hammer\""));
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        fs::write(&path, "{ not json").unwrap();

        let store = FileStore::new(&path);
        assert!(matches!(store.load(), Err(InvError::Serialization(_))));
    }

    #[test]
    fn non_object_document_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        let store = FileStore::new(&path);
        assert!(store.load().is_err());
    }
}
