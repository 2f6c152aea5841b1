mod receive;
mod send;
mod send_batch;

pub use receive::ReceiveRunner;
pub use send::SendRunner;
pub use send_batch::SendBatchRunner;
