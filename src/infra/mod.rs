pub mod clock;
pub mod http_client;
pub mod s3_store;
pub mod traced;

pub use clock::SystemClock;
pub use http_client::ReqwestHttp;
pub use s3_store::S3ObjectStore;
pub use traced::{TracedHttp, TracedStore};
