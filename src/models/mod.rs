pub mod notification;

pub use notification::{
    FetchResponse, MarkReadAck, Notification, NotificationId, NotificationType,
};
