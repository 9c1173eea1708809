pub mod announcement;
pub mod chat;
pub mod notification;
pub mod order;
pub mod pharmacy;
pub mod point;
pub mod product;
pub mod returns;
pub mod stock;
pub mod user;

pub use announcement::{Announcement, AnnouncementType};
pub use chat::{ChatMessage, ChatRole, ChatType, Chatbot, ChatbotResponse};
pub use notification::Notification;
pub use order::{
    Order, OrderDetailResponse, OrderItem, OrderItemDetailResponse, OrderItemListResponse,
    OrderListResponse, OrderStatus,
};
pub use pharmacy::{Pharmacy, PharmacyStatus};
pub use point::{Point, PointStatus};
pub use product::{MainCategory, Product};
pub use returns::{Return, ReturnItem, ReturnItemResponse, ReturnResponse, ReturnStatus};
pub use stock::{PharmacyStock, StockSummary, StockTransaction, TransactionType};
pub use user::{Admin, AdminDepartment, Profile, User, UserRole};

/// Lifecycle rules shared by the status enumerations exchanged with the backend.
pub trait Lifecycle: Copy + PartialEq + std::fmt::Debug {
    fn can_transition_to(self, next: Self) -> bool;

    fn is_terminal(self) -> bool;
}
