#![allow(dead_code)]

pub(crate) mod archive;

pub(crate) use archive::ArchiveBuilder;
pub(crate) use test_context::TestContext;
