use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::engine::assets::scene_objects::SceneObjects;
use crate::engine::camera::stadium_camera::CameraRig;
use crate::engine::core::app_state::{StartRequested, StartSource};
use crate::engine::loading::progress::LoadingProgress;
use crate::tools::overlay::{ControlId, ControlVisibilityRequest};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

#[cfg(target_arch = "wasm32")]
use web_sys::{MessageEvent, window};

/// JSON-RPC 2.0 request structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 response structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcResponse {
    pub jsonrpc: String,
    pub result: Option<serde_json::Value>,
    pub error: Option<RpcError>,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 notification structure for one-way communication.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcNotification {
    pub jsonrpc: String,
    pub method: String,
    pub params: serde_json::Value,
}

/// JSON-RPC error structure following specification.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

/// Resource managing bidirectional RPC communication with the host page.
/// Handles both request-response patterns and notification broadcasting.
#[derive(Resource, Default)]
pub struct WebRpcInterface {
    outgoing_notifications: Vec<RpcNotification>,
    outgoing_responses: Vec<RpcResponse>,
}

impl WebRpcInterface {
    /// Send notification to the host page without expecting response.
    pub fn send_notification(&mut self, method: &str, params: serde_json::Value) {
        self.outgoing_notifications.push(RpcNotification {
            jsonrpc: "2.0".to_string(),
            method: method.to_string(),
            params,
        });
    }

    /// Queue response for transmission to the host page.
    fn queue_response(&mut self, response: RpcResponse) {
        self.outgoing_responses.push(response);
    }

    #[cfg(test)]
    pub fn pending_notifications(&self) -> &[RpcNotification] {
        &self.outgoing_notifications
    }

    #[cfg(test)]
    pub fn pending_responses(&self) -> &[RpcResponse] {
        &self.outgoing_responses
    }
}

/// Plugin establishing WebRPC communication layer for iframe-based deployment.
pub struct WebRpcPlugin;

impl Plugin for WebRpcPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WebRpcInterface>()
            .add_event::<IncomingRpcMessage>()
            .add_systems(
                Update,
                (
                    process_incoming_messages,
                    handle_rpc_messages,
                    send_outgoing_messages,
                )
                    .chain(),
            );

        #[cfg(target_arch = "wasm32")]
        app.add_systems(Startup, setup_message_listener);
    }
}

#[cfg(target_arch = "wasm32")]
fn setup_message_listener(mut commands: Commands) {
    use std::sync::Arc;
    use std::sync::Mutex;

    // Thread-safe message queue for cross-thread communication.
    let message_queue: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let queue_clone = message_queue.clone();

    let closure = Closure::wrap(Box::new(move |event: MessageEvent| {
        // Filter messages to ensure they contain string data.
        if let Ok(data) = event.data().dyn_into::<js_sys::JsString>() {
            let message_str: String = data.into();

            if message_str.contains("jsonrpc") {
                if let Ok(mut queue) = queue_clone.lock() {
                    queue.push(message_str);
                }
            }
        }
    }) as Box<dyn FnMut(MessageEvent)>);

    if let Some(window) = window() {
        if let Err(e) =
            window.add_event_listener_with_callback("message", closure.as_ref().unchecked_ref())
        {
            error!("Failed to register message listener: {:?}", e);
        }
    }

    // Prevent closure from being dropped by transferring ownership to JS.
    closure.forget();
    commands.insert_resource(MessageQueue(message_queue));
}

/// Resource wrapping thread-safe message queue for WASM event handling.
#[derive(Resource)]
struct MessageQueue(std::sync::Arc<std::sync::Mutex<Vec<String>>>);

/// Event representing incoming RPC message from the host page.
#[derive(Event)]
struct IncomingRpcMessage {
    content: String,
}

fn process_incoming_messages(
    message_queue: Option<Res<MessageQueue>>,
    mut message_events: EventWriter<IncomingRpcMessage>,
) {
    let Some(queue_res) = message_queue else {
        return;
    };

    let messages = if let Ok(mut queue) = queue_res.0.lock() {
        std::mem::take(&mut *queue)
    } else {
        Vec::new()
    };

    for message_str in messages {
        message_events.write(IncomingRpcMessage {
            content: message_str,
        });
    }
}

/// Read-only scene state the query methods report on.
struct SceneSnapshot<'a> {
    diagnostics: &'a DiagnosticsStore,
    rig: &'a CameraRig,
    loading_progress: &'a LoadingProgress,
    objects: &'a SceneObjects,
}

fn handle_rpc_messages(
    mut events: EventReader<IncomingRpcMessage>,
    diagnostics: Res<DiagnosticsStore>,
    rig: Res<CameraRig>,
    loading_progress: Res<LoadingProgress>,
    objects: Res<SceneObjects>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    mut start_events: EventWriter<StartRequested>,
    mut visibility_events: EventWriter<ControlVisibilityRequest>,
) {
    let snapshot = SceneSnapshot {
        diagnostics: &diagnostics,
        rig: &rig,
        loading_progress: &loading_progress,
        objects: &objects,
    };

    for event in events.read() {
        match serde_json::from_str::<RpcRequest>(&event.content) {
            Ok(request) => {
                debug!("Processing RPC method: {}", request.method);
                if let Some(response) = handle_rpc_request(
                    &request,
                    &snapshot,
                    &mut start_events,
                    &mut visibility_events,
                ) {
                    rpc_interface.queue_response(response);
                }
            }
            Err(parse_error) => {
                warn!("Discarding malformed RPC message: {}", parse_error);
            }
        }
    }
}

/// Handle individual RPC request and generate response based on method.
fn handle_rpc_request(
    request: &RpcRequest,
    snapshot: &SceneSnapshot,
    start_events: &mut EventWriter<StartRequested>,
    visibility_events: &mut EventWriter<ControlVisibilityRequest>,
) -> Option<RpcResponse> {
    let result = match request.method.as_str() {
        "start" => handle_start(start_events),
        "set_control_visibility" => handle_set_control_visibility(&request.params, visibility_events),
        "get_scene_state" => handle_get_scene_state(snapshot),
        "get_fps" => handle_get_fps(snapshot.diagnostics),
        _ => {
            warn!("Unknown RPC method: {}", request.method);
            Err(RpcError::method_not_found(&request.method))
        }
    };

    // Only requests with IDs get a response.
    let id = request.id.clone()?;

    match result {
        Ok(result_value) => Some(RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: Some(result_value),
            error: None,
            id: Some(id),
        }),
        Err(error) => Some(create_error_response(id, error)),
    }
}

fn handle_start(
    start_events: &mut EventWriter<StartRequested>,
) -> Result<serde_json::Value, RpcError> {
    start_events.write(StartRequested {
        source: StartSource::Rpc,
    });
    info!("Start requested over RPC");

    Ok(serde_json::json!({ "accepted": true }))
}

/// Show or hide a named overlay control.
fn handle_set_control_visibility(
    params: &serde_json::Value,
    visibility_events: &mut EventWriter<ControlVisibilityRequest>,
) -> Result<serde_json::Value, RpcError> {
    #[derive(serde::Deserialize)]
    struct ControlVisibilityParams {
        control: String,
        visible: bool,
    }

    let parsed = serde_json::from_value::<ControlVisibilityParams>(params.clone())
        .map_err(|_| RpcError::invalid_params("Expected 'control' and 'visible' parameters"))?;

    let control = ControlId::from_name(&parsed.control)
        .ok_or_else(|| RpcError::invalid_params(&format!("Unknown control: {}", parsed.control)))?;

    visibility_events.write(ControlVisibilityRequest {
        control,
        visible: parsed.visible,
    });

    Ok(serde_json::json!({
        "control": control.name(),
        "visible": parsed.visible
    }))
}

fn handle_get_scene_state(snapshot: &SceneSnapshot) -> Result<serde_json::Value, RpcError> {
    let loaded: Vec<&str> = snapshot
        .objects
        .loaded()
        .iter()
        .map(|asset| asset.name())
        .collect();

    Ok(serde_json::json!({
        "phase": snapshot.rig.phase().as_str(),
        "azimuth": snapshot.rig.azimuth,
        "flying": snapshot.rig.is_flying(),
        "loaded": loaded,
        "fielder_clones": snapshot.objects.fielder_clones.len(),
        "loading": snapshot.loading_progress.to_json(),
    }))
}

/// Handle FPS retrieval with diagnostic system integration.
fn handle_get_fps(diagnostics: &DiagnosticsStore) -> Result<serde_json::Value, RpcError> {
    let fps = diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|fps_diagnostic| fps_diagnostic.smoothed())
        .unwrap_or(0.0) as f32;

    Ok(serde_json::json!({
        "fps": fps
    }))
}

fn create_error_response(id: serde_json::Value, error: RpcError) -> RpcResponse {
    RpcResponse {
        jsonrpc: "2.0".to_string(),
        result: None,
        error: Some(error),
        id: Some(id),
    }
}

/// Send queued notifications and responses to the host page.
fn send_outgoing_messages(mut rpc_interface: ResMut<WebRpcInterface>) {
    // Send notifications first.
    for notification in rpc_interface.outgoing_notifications.drain(..) {
        send_message_to_parent(&notification);
    }

    // Send responses second to maintain order.
    for response in rpc_interface.outgoing_responses.drain(..) {
        send_message_to_parent(&response);
    }
}

/// Send serialized message to parent window (host page).
fn send_message_to_parent<T: Serialize>(message: &T) {
    #[cfg(target_arch = "wasm32")]
    {
        match serde_json::to_string(message) {
            Ok(json) => {
                if let Some(window) = window() {
                    if let Some(parent) = window.parent().ok().flatten() {
                        if let Err(e) = parent.post_message(&JsValue::from_str(&json), "*") {
                            error!("Failed to send message to parent: {:?}", e);
                        }
                    } else {
                        warn!("No parent window available for message transmission");
                    }
                } else {
                    error!("Window object not available");
                }
            }
            Err(e) => {
                error!("Failed to serialize message: {}", e);
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        // No-op for non-WASM targets.
        let _ = message;
    }
}

/// Standard RPC error codes and constructors.
impl RpcError {
    pub fn method_not_found(method: &str) -> Self {
        Self {
            code: -32601,
            message: "Method not found".to_string(),
            data: Some(serde_json::json!({ "method": method })),
        }
    }

    pub fn invalid_params(message: &str) -> Self {
        Self {
            code: -32602,
            message: message.to_string(),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<DiagnosticsStore>()
            .init_resource::<CameraRig>()
            .init_resource::<LoadingProgress>()
            .init_resource::<SceneObjects>()
            .init_resource::<WebRpcInterface>()
            .add_event::<IncomingRpcMessage>()
            .add_event::<StartRequested>()
            .add_event::<ControlVisibilityRequest>()
            .add_systems(Update, handle_rpc_messages);
        app
    }

    fn send(app: &mut App, message: &str) {
        app.world_mut().send_event(IncomingRpcMessage {
            content: message.to_string(),
        });
        app.update();
    }

    fn last_response(app: &App) -> RpcResponse {
        app.world()
            .resource::<WebRpcInterface>()
            .pending_responses()
            .last()
            .cloned()
            .unwrap()
    }

    #[test]
    fn start_raises_start_signal() {
        let mut app = test_app();
        send(&mut app, r#"{"jsonrpc":"2.0","method":"start","params":{},"id":1}"#);

        assert_eq!(app.world().resource::<Events<StartRequested>>().len(), 1);
        let response = last_response(&app);
        assert_eq!(response.id, Some(serde_json::json!(1)));
        assert_eq!(response.result.unwrap()["accepted"], true);
    }

    #[test]
    fn start_without_id_runs_silently() {
        let mut app = test_app();
        send(&mut app, r#"{"jsonrpc":"2.0","method":"start"}"#);

        assert_eq!(app.world().resource::<Events<StartRequested>>().len(), 1);
        assert!(app
            .world()
            .resource::<WebRpcInterface>()
            .pending_responses()
            .is_empty());
    }

    #[test]
    fn unknown_method_is_not_found() {
        let mut app = test_app();
        send(&mut app, r#"{"jsonrpc":"2.0","method":"connect_wallet","params":{},"id":"a"}"#);

        let error = last_response(&app).error.unwrap();
        assert_eq!(error.code, -32601);
        assert_eq!(error.data.unwrap()["method"], "connect_wallet");
    }

    #[test]
    fn bad_visibility_params_are_rejected() {
        let mut app = test_app();
        send(
            &mut app,
            r#"{"jsonrpc":"2.0","method":"set_control_visibility","params":{"control":"wallet","visible":true},"id":2}"#,
        );
        assert_eq!(last_response(&app).error.unwrap().code, -32602);

        send(
            &mut app,
            r#"{"jsonrpc":"2.0","method":"set_control_visibility","params":{"control":"start"},"id":3}"#,
        );
        assert_eq!(last_response(&app).error.unwrap().code, -32602);
        assert!(app
            .world()
            .resource::<Events<ControlVisibilityRequest>>()
            .is_empty());
    }

    #[test]
    fn visibility_request_is_forwarded() {
        let mut app = test_app();
        send(
            &mut app,
            r#"{"jsonrpc":"2.0","method":"set_control_visibility","params":{"control":"swing_left","visible":true},"id":4}"#,
        );

        let events = app.world().resource::<Events<ControlVisibilityRequest>>();
        let mut cursor = events.get_cursor();
        let request = cursor.read(events).next().unwrap();
        assert_eq!(request.control, ControlId::SwingLeft);
        assert!(request.visible);
    }

    #[test]
    fn scene_state_reports_phase_and_azimuth() {
        let mut app = test_app();
        send(&mut app, r#"{"jsonrpc":"2.0","method":"get_scene_state","id":5}"#);

        let result = last_response(&app).result.unwrap();
        assert_eq!(result["phase"], "idle_orbit");
        assert!(result["azimuth"].as_f64().is_some());
        assert_eq!(result["loaded"], serde_json::json!([]));
    }
}
