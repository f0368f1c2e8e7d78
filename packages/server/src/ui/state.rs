//! Server state shared by the handlers.

use std::sync::Arc;

use crate::usecase::{
    ConnectUseCase, DisconnectUseCase, JoinRoomUseCase, ListRoomsUseCase, ReportErrorUseCase,
    SendMessageUseCase,
};

/// Shared application state
pub struct AppState {
    pub connect_usecase: Arc<ConnectUseCase>,
    pub join_room_usecase: Arc<JoinRoomUseCase>,
    pub send_message_usecase: Arc<SendMessageUseCase>,
    pub disconnect_usecase: Arc<DisconnectUseCase>,
    pub list_rooms_usecase: Arc<ListRoomsUseCase>,
    pub report_error_usecase: Arc<ReportErrorUseCase>,
}
