use dv_core::GeoPoint;

/// One discrete operator action fed to [`Editor::dispatch`](crate::Editor::dispatch).
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum EditorEvent {
    StartLocateUser,
    StartSetWarehouse,
    StartAddDelivery,
    StartCollect,
    StopCollect,
    MapClick(GeoPoint),
    /// Edit of the review panel's pickup-duration field; `None` clears it.
    SetPickupDuration(Option<u32>),
    /// Edit of the review panel's delivery-duration field; `None` clears it.
    SetDeliveryDuration(Option<u32>),
    ConfirmAdd,
    Cancel,
}

impl EditorEvent {
    /// Short action name used in errors and logs.
    pub fn name(&self) -> &'static str {
        match self {
            EditorEvent::StartLocateUser => "locate",
            EditorEvent::StartSetWarehouse => "set warehouse",
            EditorEvent::StartAddDelivery => "add delivery",
            EditorEvent::StartCollect => "collect nodes",
            EditorEvent::StopCollect => "stop collecting",
            EditorEvent::MapClick(_) => "map click",
            EditorEvent::SetPickupDuration(_) => "set pickup duration",
            EditorEvent::SetDeliveryDuration(_) => "set delivery duration",
            EditorEvent::ConfirmAdd => "confirm",
            EditorEvent::Cancel => "cancel",
        }
    }
}
