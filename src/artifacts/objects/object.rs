use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Result;
use bytes::Bytes;
use sha1::{Digest, Sha1};
use std::io::BufRead;
use std::path::PathBuf;

pub trait Packable {
    fn serialize(&self) -> Result<Bytes>;
}

pub trait Unpackable {
    fn deserialize(reader: impl BufRead) -> Result<Self>
    where
        Self: Sized;
}

/// Hash raw content the same way stored objects are identified
pub fn hash_content(content: &[u8]) -> Result<ObjectId> {
    let mut hasher = Sha1::new();
    hasher.update(content);

    let oid = hasher.finalize();
    ObjectId::try_parse(format!("{oid:x}"))
}

pub trait Object: Packable {
    fn object_type(&self) -> ObjectType;

    // Objects carry no header: the id is the hash of the exact stored bytes.
    fn object_id(&self) -> Result<ObjectId> {
        hash_content(&self.serialize()?)
    }

    fn object_path(&self) -> Result<PathBuf> {
        Ok(PathBuf::from(self.object_type().dir_name()).join(self.object_id()?.to_path()))
    }
}
