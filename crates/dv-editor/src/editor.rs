//! The `Editor` struct and its event dispatch.

use tracing::{debug, info, warn};

use dv_core::{EditorConfig, GeoPoint};
use dv_graph::{parse_graph, GraphDocument, LinearScanResolver, Node, NodeResolver};
use dv_request::{parse_request, write_request, Delivery, DeliveryRequest, NewDelivery, Warehouse};

use crate::{
    CollectedNodes, CollectedPlan, DurationFields, EditorError, EditorEvent, EditorObserver,
    EditorResult, InteractionState, StagedPair, StagedStop, StateKind, StopType,
};

// ── Editor ────────────────────────────────────────────────────────────────────

/// The interactive request editor.
///
/// `Editor<R>` owns everything an operator session touches:
///
/// * the loaded **graph** and **request** documents (each replaced wholesale
///   on load; a failed load leaves the previous one in place),
/// * the **interaction state**, which decides what the next click means,
/// * the **staged pairs** confirmed through the add-delivery flow,
/// * the **collected nodes** of bulk-collect mode,
/// * the operator's **user location**.
///
/// Discrete actions go through [`dispatch`](Self::dispatch); direct edits
/// such as loads and removals are plain methods.  Every rejected action
/// leaves the whole model unchanged.
pub struct Editor<R: NodeResolver = LinearScanResolver> {
    config:        EditorConfig,
    resolver:      R,
    graph:         Option<GraphDocument>,
    request:       Option<DeliveryRequest>,
    user_location: Option<GeoPoint>,
    state:         InteractionState,
    durations:     DurationFields,
    staged:        Vec<StagedPair>,
    collected:     CollectedNodes,
}

impl Editor<LinearScanResolver> {
    /// An empty editor resolving clicks with a linear scan.
    pub fn new(config: EditorConfig) -> Self {
        Self::with_resolver(config, LinearScanResolver)
    }
}

impl Default for Editor<LinearScanResolver> {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl<R: NodeResolver> Editor<R> {
    pub fn with_resolver(config: EditorConfig, resolver: R) -> Self {
        Self {
            config,
            resolver,
            graph:         None,
            request:       None,
            user_location: None,
            state:         InteractionState::Idle,
            durations:     DurationFields::default(),
            staged:        Vec::new(),
            collected:     CollectedNodes::new(),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn graph(&self) -> Option<&GraphDocument> {
        self.graph.as_ref()
    }

    pub fn request(&self) -> Option<&DeliveryRequest> {
        self.request.as_ref()
    }

    pub fn user_location(&self) -> Option<GeoPoint> {
        self.user_location
    }

    pub fn durations(&self) -> DurationFields {
        self.durations
    }

    pub fn staged(&self) -> &[StagedPair] {
        &self.staged
    }

    pub fn collected(&self) -> &CollectedNodes {
        &self.collected
    }

    /// Whether the confirm action is enabled: a pair is under review and
    /// both duration fields hold a value.
    pub fn can_confirm(&self) -> bool {
        matches!(self.state, InteractionState::ReviewingNewDelivery { .. })
            && self.durations.both().is_some()
    }

    /// The current reading of the collected buffer.
    pub fn collected_plan(&self) -> CollectedPlan<'_> {
        self.collected.interpret(self.request.is_some())
    }

    /// Markers to draw: confirmed staged pairs, then the pending pickup and
    /// delivery, then the collected nodes.
    pub fn display_stops(&self) -> Vec<StagedStop> {
        let mut out: Vec<StagedStop> = self
            .staged
            .iter()
            .flat_map(|p| [p.pickup.clone(), p.delivery.clone()])
            .collect();
        out.extend(self.state.pending_pickup().cloned());
        out.extend(self.state.pending_delivery().cloned());
        out.extend(self.collected_plan().stops());
        out
    }

    // ── Document loads ────────────────────────────────────────────────────

    /// Parse and install a graph document.  On error the previous graph is
    /// kept.
    pub fn load_graph(&mut self, xml: &str) -> EditorResult<&GraphDocument> {
        let graph = parse_graph(xml, self.config.fallback_bounds)?;
        Ok(self.set_graph(graph))
    }

    pub fn set_graph(&mut self, graph: GraphDocument) -> &GraphDocument {
        info!(nodes = graph.node_count(), segments = graph.segment_count(), "graph installed");
        self.graph.insert(graph)
    }

    /// Parse and install a request document.  On error the previous request
    /// is kept.
    pub fn load_request(&mut self, xml: &str) -> EditorResult<&DeliveryRequest> {
        let request = parse_request(xml)?;
        Ok(self.set_request(request))
    }

    pub fn set_request(&mut self, request: DeliveryRequest) -> &DeliveryRequest {
        info!(deliveries = request.delivery_count(), "request installed");
        self.request.insert(request)
    }

    // ── Direct edits ──────────────────────────────────────────────────────

    /// Remove the request's delivery at `index`; the warehouse is untouched.
    pub fn remove_delivery(&mut self, index: usize) -> EditorResult<Delivery> {
        let request = self.request.as_mut().ok_or(EditorError::NoRequestLoaded)?;
        let removed = request.remove_delivery(index)?;
        info!(index, remaining = request.delivery_count(), "delivery removed");
        Ok(removed)
    }

    /// Drop a confirmed staged pair.
    pub fn remove_staged(&mut self, index: usize) -> EditorResult<StagedPair> {
        if index >= self.staged.len() {
            return Err(EditorError::StagedIndex { index, len: self.staged.len() });
        }
        Ok(self.staged.remove(index))
    }

    pub fn clear_collected(&mut self) {
        self.collected.clear();
    }

    // ── Export ────────────────────────────────────────────────────────────

    /// The loaded request extended with staged and collected pairs, or with
    /// the first collected node as warehouse when no request is loaded.
    ///
    /// `None` when there is no warehouse from either source.
    pub fn combined_request(&self) -> Option<DeliveryRequest> {
        let plan = self.collected_plan();
        let mut request = match (&self.request, plan.warehouse) {
            (Some(r), _) => r.clone(),
            (None, Some(w)) => DeliveryRequest::new(Warehouse {
                node_id:   w.id.clone(),
                departure: self.config.default_departure,
            }),
            (None, None) => return None,
        };
        for d in self.pending_deliveries(&plan) {
            request.push_delivery(d);
        }
        Some(request)
    }

    /// Serialize the combined request as a request document.
    ///
    /// # Errors
    ///
    /// [`EditorError::MissingWarehouse`] when neither a loaded request nor
    /// the collected buffer supplies a warehouse; such a document could not
    /// be loaded back.
    pub fn export_document(&self) -> EditorResult<String> {
        let Some(request) = self.combined_request() else {
            warn!("export refused: no warehouse");
            return Err(EditorError::MissingWarehouse);
        };
        Ok(write_request(Some(&request), &[])?)
    }

    fn pending_deliveries(&self, plan: &CollectedPlan<'_>) -> Vec<NewDelivery> {
        let mut out: Vec<NewDelivery> =
            self.staged.iter().map(StagedPair::to_new_delivery).collect();
        out.extend(plan.new_deliveries());
        out
    }

    // ── Dispatch ──────────────────────────────────────────────────────────

    /// Apply one operator action.
    ///
    /// Returns the state the editor is in afterwards.  A rejected action is
    /// logged, reported through [`EditorObserver::on_warning`], and returned
    /// as `Err`; the editor is unchanged in that case.
    pub fn dispatch<O: EditorObserver>(
        &mut self,
        event:    EditorEvent,
        observer: &mut O,
    ) -> EditorResult<StateKind> {
        let from = self.state.kind();
        match self.apply(event, observer) {
            Ok(()) => {
                let to = self.state.kind();
                if from != to {
                    debug!(%from, %to, action = event.name(), "transition");
                    observer.on_transition(from, to);
                }
                Ok(to)
            }
            Err(e) => {
                warn!(state = %from, action = event.name(), error = %e, "action rejected");
                observer.on_warning(&e);
                Err(e)
            }
        }
    }

    fn apply<O: EditorObserver>(
        &mut self,
        event:    EditorEvent,
        observer: &mut O,
    ) -> EditorResult<()> {
        match event {
            EditorEvent::StartLocateUser => {
                self.require_idle(event)?;
                self.state = InteractionState::AwaitingUserLocationClick;
            }
            EditorEvent::StartSetWarehouse => {
                self.require_idle(event)?;
                self.require_graph()?;
                self.state = InteractionState::AwaitingWarehouseClick;
            }
            EditorEvent::StartAddDelivery => {
                self.require_idle(event)?;
                self.require_graph()?;
                self.durations.clear();
                self.state = InteractionState::AwaitingPickupClick;
            }
            EditorEvent::StartCollect => {
                self.require_idle(event)?;
                self.require_graph()?;
                self.collected.clear();
                self.state = InteractionState::CollectingNodes;
            }
            EditorEvent::StopCollect => {
                if self.state != InteractionState::CollectingNodes {
                    return Err(self.invalid(event));
                }
                self.state = InteractionState::Idle;
            }
            EditorEvent::MapClick(pos) => self.on_click(pos, observer)?,
            EditorEvent::SetPickupDuration(v) => self.durations.pickup = v,
            EditorEvent::SetDeliveryDuration(v) => self.durations.delivery = v,
            EditorEvent::ConfirmAdd => self.confirm(event)?,
            EditorEvent::Cancel => {
                let in_flow = !matches!(
                    self.state,
                    InteractionState::Idle | InteractionState::CollectingNodes
                );
                if in_flow {
                    self.durations.clear();
                }
                self.state = InteractionState::Idle;
            }
        }
        Ok(())
    }

    fn on_click<O: EditorObserver>(&mut self, pos: GeoPoint, observer: &mut O) -> EditorResult<()> {
        match &self.state {
            InteractionState::Idle => {
                debug!(%pos, "idle click");
                observer.on_idle_click(pos);
            }
            InteractionState::AwaitingUserLocationClick => {
                self.user_location = Some(pos);
                info!(%pos, "user location set");
                self.state = InteractionState::Idle;
            }
            InteractionState::AwaitingWarehouseClick => {
                let node = self.resolve(pos)?;
                self.place_warehouse(node);
                self.state = InteractionState::Idle;
            }
            InteractionState::AwaitingPickupClick => {
                let node = self.resolve(pos)?;
                debug!(node = %node.id, "pickup staged");
                self.state = InteractionState::AwaitingDeliveryClick {
                    pickup: StagedStop::at_node(&node, StopType::Pickup),
                };
            }
            InteractionState::AwaitingDeliveryClick { pickup } => {
                let pickup = pickup.clone();
                let node = self.resolve(pos)?;
                debug!(node = %node.id, "delivery staged");
                self.state = InteractionState::ReviewingNewDelivery {
                    pickup,
                    delivery: StagedStop::at_node(&node, StopType::Delivery),
                };
            }
            InteractionState::ReviewingNewDelivery { .. } => {
                debug!(%pos, "click ignored during review");
            }
            InteractionState::CollectingNodes => {
                let node = self.resolve(pos)?;
                let id = node.id.clone();
                if !self.collected.push(node) {
                    return Err(EditorError::DuplicateCollectedNode(id));
                }
                debug!(node = %id, collected = self.collected.len(), "node collected");
            }
        }
        Ok(())
    }

    fn confirm(&mut self, event: EditorEvent) -> EditorResult<()> {
        let InteractionState::ReviewingNewDelivery { pickup, delivery } = &self.state else {
            return Err(self.invalid(event));
        };
        let (pickup_s, delivery_s) = self.durations.both().ok_or(EditorError::IncompleteReview)?;
        let pair = StagedPair {
            pickup:   pickup.clone().with_duration(pickup_s),
            delivery: delivery.clone().with_duration(delivery_s),
        };
        info!(
            pickup = %pair.pickup.node_id,
            delivery = %pair.delivery.node_id,
            staged = self.staged.len() + 1,
            "delivery staged"
        );
        self.staged.push(pair);
        self.durations.clear();
        self.state = InteractionState::Idle;
        Ok(())
    }

    fn place_warehouse(&mut self, node: Node) {
        info!(node = %node.id, "warehouse set");
        match self.request.as_mut() {
            Some(r) => r.set_warehouse_node(node.id),
            None => {
                self.request = Some(DeliveryRequest::new(Warehouse {
                    node_id:   node.id,
                    departure: self.config.default_departure,
                }));
            }
        }
    }

    // ── Guards ────────────────────────────────────────────────────────────

    fn resolve(&self, pos: GeoPoint) -> EditorResult<Node> {
        let graph = self.require_graph()?;
        self.resolver
            .resolve(graph, pos)
            .cloned()
            .ok_or(EditorError::NodeNotResolved(pos))
    }

    fn require_graph(&self) -> EditorResult<&GraphDocument> {
        self.graph.as_ref().ok_or(EditorError::NoGraphLoaded)
    }

    fn require_idle(&self, event: EditorEvent) -> EditorResult<()> {
        if self.state.is_idle() { Ok(()) } else { Err(self.invalid(event)) }
    }

    fn invalid(&self, event: EditorEvent) -> EditorError {
        EditorError::InvalidTransition { state: self.state.kind(), action: event.name() }
    }
}
