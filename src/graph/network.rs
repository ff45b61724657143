use super::*;
use crate::data_structures::{Slab, SlabIndex};

use casey::pascal;
use concat_idents::concat_idents;
#[cfg(feature = "debug_gates")]
use indexmap::IndexMap;
use tracing::{debug, trace, warn};

use GateType::*;

/// Creates gatename and gatename2 constructors for every gate type.
/// gatename creates an unconnected gate, gatename2 also connects two wires to its inputs.
macro_rules! gate_constructors {
    ($name:ident,$($rest:ident),*) => {
        gate_constructors!($name);
        gate_constructors!($($rest),*);
    };
    ($name:ident) => {
        /// Returns the [GateIndex] of a new gate with no connections.
        ///
        /// Providing a good name allows for a great debugging experience, you can disable the "debug_gates" feature
        /// to slightly increase performance.
        pub fn $name<S: Into<String>>(&mut self, name: S) -> GateIndex {
            self.gate(pascal!($name), name)
        }

        concat_idents!(name2 = $name, 2 {
            /// Returns the [GateIndex] of a new gate with input A driven by wire `a` and input B by wire `b`.
            ///
            /// # Errors
            ///
            /// Fails if either wire is unknown or already at its maximum fan-out.
            pub fn name2<S: Into<String>>(&mut self, a: WireIndex, b: WireIndex, name: S) -> Result<GateIndex> {
                let idx = self.gate(pascal!($name), name);
                self.add_output_connection(a, idx, InputSlot::A)?;
                self.add_output_connection(b, idx, InputSlot::B)?;
                Ok(idx)
            }
        });
    };
}

/// Unit of pending work in [Network::propagate].
#[derive(Debug, Clone, Copy)]
enum Step {
    Drive {
        wire: WireIndex,
        level: LogicLevel,
        depth: usize,
    },
    Input {
        sink: Sink,
        level: LogicLevel,
        depth: usize,
    },
}

/// Record of a single call to [Network::drive_level] or [Network::drive_input].
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Propagation {
    /// Every gate input that was driven, in the order it happened.
    pub driven: Vec<Sink>,
    /// Deepest chain of wire drives caused by the call, 0 means no gate forwarded its output.
    pub depth: usize,
}

/// Arena of [Gates](Gate) and [Wires](Wire) that refer to each other by index.
///
/// Driving a wire synchronously drives every gate input it is connected to, each of those
/// gates recomputes its output and drives its own output wire, depth first, until nothing
/// is left to drive. Inputs connected to the same wire are driven in the order they were connected.
///
/// # Example
/// ```
/// # use trilogic::{Network, InputSlot, LogicLevel::*};
/// let mut n = Network::new();
///
/// let a = n.wire("a");
/// let b = n.wire("b");
/// let inner = n.wire("inner");
///
/// let and = n.and2(a, b, "and").unwrap();
/// n.connect_output(and, inner).unwrap();
/// let nand = n.nand("nand");
/// n.add_output_connection(inner, nand, InputSlot::A).unwrap();
/// n.add_output_connection(inner, nand, InputSlot::B).unwrap();
///
/// assert_eq!(n.output_state(nand), Undefined);
///
/// n.drive_level(a, High).unwrap();
/// n.drive_level(b, High).unwrap();
/// assert_eq!(n.output_state(and), High);
/// assert_eq!(n.output_state(nand), Low);
/// ```
#[derive(Debug, Clone)]
pub struct Network {
    gates: Slab<Gate>,
    wires: Slab<Wire>,
    config: NetworkConfig,
    propagation_stack: Vec<Step>, // Allocated outside to prevent allocations on every drive.
    #[cfg(feature = "debug_gates")]
    gate_names: IndexMap<GateIndex, String>,
    #[cfg(feature = "debug_gates")]
    wire_names: IndexMap<WireIndex, String>,
    #[cfg(feature = "debug_gates")]
    probes: IndexMap<GateIndex, String>,
}

impl Network {
    /// Returns an empty [Network] with the default [NetworkConfig].
    pub fn new() -> Self {
        Self::with_config(Default::default())
    }

    /// Returns an empty [Network] with the limits in `config`.
    pub fn with_config(config: NetworkConfig) -> Self {
        Network {
            gates: Slab::new(),
            wires: Slab::new(),
            config,
            propagation_stack: Vec::new(),
            #[cfg(feature = "debug_gates")]
            gate_names: Default::default(),
            #[cfg(feature = "debug_gates")]
            wire_names: Default::default(),
            #[cfg(feature = "debug_gates")]
            probes: Default::default(),
        }
    }

    /// Returns the limits this network enforces.
    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    /// Returns the [GateIndex] of a new, initialized gate of type `ty` with no connections.
    #[allow(unused_variables)]
    pub fn gate<S: Into<String>>(&mut self, ty: GateType, name: S) -> GateIndex {
        let idx = self.gates.insert(Gate::new(ty)).into();
        #[cfg(feature = "debug_gates")]
        self.gate_names.insert(idx, name.into());
        idx
    }

    // Create constructors for all gate types.
    gate_constructors!(nand, and, or, xor);

    /// Returns the [WireIndex] of a new wire with no sinks.
    #[allow(unused_variables)]
    pub fn wire<S: Into<String>>(&mut self, name: S) -> WireIndex {
        let idx = self.wires.insert(Wire::new()).into();
        #[cfg(feature = "debug_gates")]
        self.wire_names.insert(idx, name.into());
        idx
    }

    /// Logs `err` and returns it.
    fn reject<T>(&self, err: NetworkError) -> Result<T> {
        warn!(%err, "network operation rejected");
        Err(err)
    }

    /// Connects `wire` to input `slot` of `gate`.
    ///
    /// # Errors
    ///
    /// Returns [NetworkError::UnknownWire] or [NetworkError::UnknownGate] for indexes out of range of this network,
    /// [NetworkError::FanoutExceeded] if `wire` already drives [max_fanout](NetworkConfig::max_fanout) inputs.
    ///
    /// Indexes carry no network tag: an index created by another network that happens to be in range
    /// refers to a local gate or wire and is not detected.
    pub fn add_output_connection(
        &mut self,
        wire: WireIndex,
        gate: GateIndex,
        slot: InputSlot,
    ) -> Result<()> {
        if self.gates.get(gate.into()).is_none() {
            return self.reject(NetworkError::UnknownGate(gate));
        }
        let max_fanout = self.config.max_fanout;
        let result = match self.wires.get_mut(wire.into()) {
            Some(w) => w.add_output_connection(wire, gate, slot, max_fanout),
            None => Err(NetworkError::UnknownWire(wire)),
        };
        match result {
            Ok(()) => {
                trace!(%wire, %gate, %slot, "connected wire to gate input");
                Ok(())
            }
            Err(err) => self.reject(err),
        }
    }

    /// Same as [Network::add_output_connection] with the slot given as a raw index.
    ///
    /// # Errors
    ///
    /// Returns [NetworkError::InvalidSlot] if `slot` is not 0 or 1.
    pub fn add_output_connection_at(
        &mut self,
        wire: WireIndex,
        gate: GateIndex,
        slot: usize,
    ) -> Result<()> {
        match InputSlot::try_from(slot) {
            Ok(slot) => self.add_output_connection(wire, gate, slot),
            Err(err) => self.reject(err),
        }
    }

    /// Forwards the output of `gate` to `wire` from now on, replacing any previous target.
    ///
    /// The current output is not driven onto `wire` until the gate recomputes.
    pub fn connect_output(&mut self, gate: GateIndex, wire: WireIndex) -> Result<()> {
        if self.wires.get(wire.into()).is_none() {
            return self.reject(NetworkError::UnknownWire(wire));
        }
        match self.gates.get_mut(gate.into()) {
            Some(g) => {
                g.connect_output(wire);
                trace!(%gate, %wire, "connected gate output to wire");
                Ok(())
            }
            None => self.reject(NetworkError::UnknownGate(gate)),
        }
    }

    /// Drives `level` into every input connected to `wire` and propagates the changes.
    ///
    /// # Errors
    ///
    /// Returns [NetworkError::Topology] if propagation goes deeper than
    /// [max_propagation_depth](NetworkConfig::max_propagation_depth). With a bound at least as long as
    /// the longest path this only happens when the wiring loops back on itself.
    /// Gates driven before the error keep their new state.
    pub fn drive_level(&mut self, wire: WireIndex, level: LogicLevel) -> Result<Propagation> {
        if self.wires.get(wire.into()).is_none() {
            return self.reject(NetworkError::UnknownWire(wire));
        }
        self.propagate(Step::Drive {
            wire,
            level,
            depth: 0,
        })
    }

    /// Drives `level` into input `slot` of `gate` and propagates the change.
    ///
    /// # Errors
    ///
    /// See [Network::drive_level].
    pub fn drive_input(
        &mut self,
        gate: GateIndex,
        slot: InputSlot,
        level: LogicLevel,
    ) -> Result<Propagation> {
        if self.gates.get(gate.into()).is_none() {
            return self.reject(NetworkError::UnknownGate(gate));
        }
        self.propagate(Step::Input {
            sink: Sink { gate, slot },
            level,
            depth: 0,
        })
    }

    /// Recomputes the output of `gate` and forwards it to its output wire, if any.
    ///
    /// # Errors
    ///
    /// See [Network::drive_level].
    pub fn compute_output(&mut self, gate: GateIndex) -> Result<Propagation> {
        let (level, output_wire) = match self.gates.get_mut(gate.into()) {
            Some(g) => (g.compute_output(), g.output_connection()),
            None => return self.reject(NetworkError::UnknownGate(gate)),
        };
        match output_wire {
            Some(wire) => self.propagate(Step::Drive {
                wire,
                level,
                depth: 1,
            }),
            None => Ok(Default::default()),
        }
    }

    /// Runs the propagation loop starting at `first`.
    ///
    /// The stack is processed depth first and sinks are pushed in reverse, so the result
    /// is the same as recursively driving each sink in connection order.
    fn propagate(&mut self, first: Step) -> Result<Propagation> {
        let mut propagation = Propagation::default();
        self.propagation_stack.clear();
        self.propagation_stack.push(first);

        while let Some(step) = self.propagation_stack.pop() {
            match step {
                Step::Drive { wire, level, depth } => {
                    if depth > self.config.max_propagation_depth {
                        self.propagation_stack.clear();
                        return self.reject(NetworkError::Topology { wire, depth });
                    }
                    propagation.depth = propagation.depth.max(depth);

                    let sinks = match self.wires.get(wire.into()) {
                        Some(w) => w.sinks(),
                        None => {
                            self.propagation_stack.clear();
                            return self.reject(NetworkError::UnknownWire(wire));
                        }
                    };
                    trace!(%wire, %level, depth, fanout = sinks.len(), "drive wire");
                    self.propagation_stack
                        .extend(sinks.iter().rev().map(|sink| Step::Input {
                            sink: *sink,
                            level,
                            depth,
                        }));
                }
                Step::Input { sink, level, depth } => {
                    let gate = match self.gates.get_mut(sink.gate.into()) {
                        Some(g) => g,
                        None => {
                            self.propagation_stack.clear();
                            return self.reject(NetworkError::UnknownGate(sink.gate));
                        }
                    };
                    #[cfg(feature = "debug_gates")]
                    let old_output = gate.output_state();
                    let output = gate.drive_input(sink.slot, level);
                    propagation.driven.push(sink);
                    trace!(gate = %sink.gate, slot = %sink.slot, %level, %output, "drive input");

                    #[cfg(feature = "debug_gates")]
                    if old_output != output {
                        if let Some(probe) = self.probes.get(&sink.gate) {
                            tracing::info!(probe = %probe, %output, "probed gate changed");
                        }
                    }

                    // Forwarded on every recompute, even if the output didn't change.
                    if let Some(wire) = gate.output_connection() {
                        self.propagation_stack.push(Step::Drive {
                            wire,
                            level: output,
                            depth: depth + 1,
                        });
                    }
                }
            }
        }
        Ok(propagation)
    }

    /// Returns the cached output of `gate`.
    ///
    /// # Panics
    ///
    /// Will panic if `gate` was not created by this network.
    pub fn output_state(&self, gate: GateIndex) -> LogicLevel {
        self.gates[SlabIndex::from(gate)].output_state()
    }

    /// Returns a reference to `gate` if it belongs to this network.
    pub fn get_gate(&self, gate: GateIndex) -> Option<&Gate> {
        self.gates.get(gate.into())
    }

    /// Returns a reference to `wire` if it belongs to this network.
    pub fn get_wire(&self, wire: WireIndex) -> Option<&Wire> {
        self.wires.get(wire.into())
    }

    /// Re-initializes every gate and wire: inputs become [Undefined](LogicLevel::Undefined)
    /// and all connections are removed. Gates and wires themselves are kept.
    pub fn reset(&mut self) {
        for (_, gate) in self.gates.iter_mut() {
            gate.init();
        }
        for (_, wire) in self.wires.iter_mut() {
            wire.init();
        }
        debug!(
            gates = self.gates.len(),
            wires = self.wires.len(),
            "network reset"
        );
    }

    /// Returns the number of gates in the network.
    pub fn gate_count(&self) -> usize {
        self.gates.len()
    }

    /// Returns the number of wires in the network.
    pub fn wire_count(&self) -> usize {
        self.wires.len()
    }

    /// "Probes" `gate`, meaning that whenever its output changes during propagation
    /// the new level will be logged along with `name`.
    #[cfg(feature = "debug_gates")]
    pub fn probe<S: Into<String>>(&mut self, gate: GateIndex, name: S) {
        self.probes.insert(gate, name.into());
    }

    /// Returns the "full name" of `gate` in format:
    ///
    /// "GATE_TYPE:GATE_NAME" if the "debug_gates" feature is enabled.
    ///
    /// "GATE_TYPE:INDEX" if the "debug_gates" feature is disabled.
    fn gate_full_name(&self, gate: GateIndex, g: &Gate) -> String {
        #[cfg(feature = "debug_gates")]
        if let Some(name) = self.gate_names.get(&gate) {
            return format!("{}:{}", g.ty(), name);
        }
        format!("{}:{}", g.ty(), gate)
    }

    /// Returns the "full name" of `wire`, see [Network::gate_full_name].
    fn wire_full_name(&self, wire: WireIndex) -> String {
        #[cfg(feature = "debug_gates")]
        if let Some(name) = self.wire_names.get(&wire) {
            return format!("WIRE:{}", name);
        }
        format!("WIRE:{}", wire)
    }

    /// Writes the network in [dot](https://en.wikipedia.org/wiki/DOT_(graph_description_language)) format
    /// to `out`, wires and gates are both nodes.
    pub fn dump_dot<W: std::io::Write>(&self, out: &mut W) -> std::io::Result<()> {
        use petgraph::dot::{Config, Dot};
        use std::collections::HashMap;

        let mut graph = petgraph::Graph::<String, ()>::new();
        let mut gate_nodes = HashMap::new();
        let mut wire_nodes = HashMap::new();
        for (i, gate) in self.gates.iter() {
            let idx = GateIndex::from(i);
            gate_nodes.insert(idx, graph.add_node(self.gate_full_name(idx, gate)));
        }
        for (i, _) in self.wires.iter() {
            let idx = WireIndex::from(i);
            wire_nodes.insert(idx, graph.add_node(self.wire_full_name(idx)));
        }
        for (i, wire) in self.wires.iter() {
            let from = wire_nodes[&WireIndex::from(i)];
            for sink in wire.sinks() {
                graph.add_edge(from, gate_nodes[&sink.gate], ());
            }
        }
        for (i, gate) in self.gates.iter() {
            if let Some(wire) = gate.output_connection() {
                graph.add_edge(gate_nodes[&GateIndex::from(i)], wire_nodes[&wire], ());
            }
        }
        write!(out, "{:?}", Dot::with_config(&graph, &[Config::EdgeNoLabel]))
    }
}

impl Default for Network {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LogicLevel::*;

    #[test]
    fn test_fanout_limit() {
        let mut n = Network::new();
        let w = n.wire("w");
        let g1 = n.and("g1");
        let g2 = n.or("g2");

        n.add_output_connection(w, g1, InputSlot::A).unwrap();
        n.add_output_connection(w, g2, InputSlot::B).unwrap();
        assert_eq!(
            n.add_output_connection(w, g1, InputSlot::B),
            Err(NetworkError::FanoutExceeded {
                wire: w,
                gate: g1,
                slot: InputSlot::B,
                max_fanout: MAX_FANOUT
            })
        );

        n.drive_level(w, High).unwrap();
        assert_eq!(n.get_gate(g1).unwrap().input(InputSlot::A), High);
        assert_eq!(n.get_gate(g2).unwrap().input(InputSlot::B), High);
        assert_eq!(n.output_state(g2), High);
    }

    #[test]
    fn test_configured_fanout() {
        let mut n = Network::with_config(NetworkConfig::default().with_max_fanout(3));
        let w = n.wire("w");
        let gates: Vec<_> = (0..3).map(|i| n.xor(format!("x{}", i))).collect();
        for g in &gates {
            n.add_output_connection(w, *g, InputSlot::A).unwrap();
        }
        let extra = n.xor("extra");
        assert!(n.add_output_connection(w, extra, InputSlot::A).is_err());

        let propagation = n.drive_level(w, High).unwrap();
        assert_eq!(propagation.driven.len(), 3);
        for g in &gates {
            assert_eq!(n.output_state(*g), High);
        }
    }

    #[test]
    fn test_invalid_slot() {
        let mut n = Network::new();
        let w = n.wire("w");
        let g = n.nand("g");
        assert_eq!(
            n.add_output_connection_at(w, g, 2),
            Err(NetworkError::InvalidSlot(2))
        );
        n.add_output_connection_at(w, g, 1).unwrap();
        assert_eq!(n.get_wire(w).unwrap().sinks()[0].slot, InputSlot::B);
    }

    #[test]
    fn test_unknown_indexes() {
        let mut other = Network::new();
        let foreign_in_range = other.wire("0");
        let foreign_wire = other.wire("1");
        let foreign_gate = other.gate(Nand, "g");

        let mut n = Network::new();
        let w = n.wire("w");
        assert_eq!(
            n.drive_level(foreign_wire, High),
            Err(NetworkError::UnknownWire(foreign_wire))
        );
        assert_eq!(
            n.add_output_connection(w, foreign_gate, InputSlot::A),
            Err(NetworkError::UnknownGate(foreign_gate))
        );
        assert_eq!(
            n.drive_input(foreign_gate, InputSlot::A, Low),
            Err(NetworkError::UnknownGate(foreign_gate))
        );

        // Indexes carry no network tag, an in range index resolves to a local wire.
        assert_eq!(foreign_in_range, w);
        assert!(n.drive_level(foreign_in_range, High).is_ok());
    }

    #[test]
    fn test_propagation_order() {
        let mut n = Network::new();
        let w = n.wire("w");
        let first_out = n.wire("first_out");
        let first = n.and("first");
        let second = n.or("second");
        let downstream = n.xor("downstream");

        n.add_output_connection(w, first, InputSlot::A).unwrap();
        n.add_output_connection(w, second, InputSlot::A).unwrap();
        n.connect_output(first, first_out).unwrap();
        n.add_output_connection(first_out, downstream, InputSlot::B)
            .unwrap();

        let propagation = n.drive_level(w, High).unwrap();
        // The first sink's downstream work completes before the second sink is driven.
        assert_eq!(
            propagation.driven,
            vec![
                Sink {
                    gate: first,
                    slot: InputSlot::A
                },
                Sink {
                    gate: downstream,
                    slot: InputSlot::B
                },
                Sink {
                    gate: second,
                    slot: InputSlot::A
                },
            ]
        );
        assert_eq!(propagation.depth, 1);
    }

    #[test]
    fn test_idempotent_redrive() {
        let mut n = Network::new();
        let a = n.wire("a");
        let b = n.wire("b");
        let mid = n.wire("mid");
        let x = n.xor2(a, b, "x").unwrap();
        n.connect_output(x, mid).unwrap();
        let out = n.nand2(mid, mid, "out").unwrap();

        n.drive_level(a, High).unwrap();
        n.drive_level(b, Low).unwrap();
        let before = (n.output_state(x), n.output_state(out));
        assert_eq!(before, (High, Low));

        n.drive_level(b, Low).unwrap();
        n.drive_level(a, High).unwrap();
        assert_eq!((n.output_state(x), n.output_state(out)), before);
    }

    #[test]
    fn test_loop_is_topology_error() {
        let mut n = Network::with_config(NetworkConfig::default().with_max_propagation_depth(10));
        let w = n.wire("w");
        let g = n.or("loop");
        n.add_output_connection(w, g, InputSlot::A).unwrap();
        n.connect_output(g, w).unwrap();

        assert_eq!(
            n.drive_level(w, High),
            Err(NetworkError::Topology { wire: w, depth: 11 })
        );

        // The network is still usable afterwards.
        let other = n.wire("other");
        let h = n.and2(other, other, "h").unwrap();
        n.drive_level(other, High).unwrap();
        assert_eq!(n.output_state(h), High);
    }

    #[test]
    fn test_depth_bound_below_longest_path() {
        let mut n = Network::with_config(NetworkConfig::default().with_max_propagation_depth(0));
        let a = n.wire("a");
        let out = n.wire("out");
        let g = n.and2(a, a, "g").unwrap();
        n.connect_output(g, out).unwrap();

        let err = n.drive_level(a, High).unwrap_err();
        assert_eq!(err, NetworkError::Topology { wire: out, depth: 1 });
        assert!(!err.to_string().contains("acyclic"));
        // Only input A was driven before the bound was hit.
        assert_eq!(n.get_gate(g).unwrap().input(InputSlot::B), Undefined);
        assert_eq!(n.output_state(g), Low);
    }

    #[test]
    fn test_compute_output_forwards() {
        let mut n = Network::new();
        let out = n.wire("out");
        let src = n.nand("src");
        let dst = n.and("dst");
        n.connect_output(src, out).unwrap();
        n.add_output_connection(out, dst, InputSlot::A).unwrap();

        let propagation = n.compute_output(src).unwrap();
        assert_eq!(propagation.driven.len(), 1);
        assert_eq!(n.get_gate(dst).unwrap().input(InputSlot::A), Undefined);
    }

    #[test]
    fn test_reset() {
        let mut n = Network::new();
        let a = n.wire("a");
        let g = n.and2(a, a, "g").unwrap();
        n.connect_output(g, a).unwrap();
        n.drive_input(g, InputSlot::A, High).ok();

        n.reset();
        assert_eq!(n.get_wire(a).unwrap().fanout(), 0);
        assert_eq!(n.get_gate(g).unwrap().output_connection(), None);
        assert_eq!(n.output_state(g), Low);
        assert_eq!(n.gate_count(), 1);
        assert_eq!(n.wire_count(), 1);
    }

    #[test]
    fn test_dump_dot() {
        let mut n = Network::new();
        let a = n.wire("a");
        let out = n.wire("out");
        let g = n.xor2(a, a, "x").unwrap();
        n.connect_output(g, out).unwrap();

        let mut dot = Vec::new();
        n.dump_dot(&mut dot).unwrap();
        let dot = String::from_utf8(dot).unwrap();
        assert!(dot.starts_with("digraph"));
        #[cfg(feature = "debug_gates")]
        assert!(dot.contains("XOR:x"));
    }

    #[cfg(feature = "debug_gates")]
    #[test]
    fn test_probe_logs_changes() {
        use std::io;
        use std::sync::{Arc, Mutex};

        #[derive(Clone)]
        struct Capture(Arc<Mutex<Vec<u8>>>);
        impl io::Write for Capture {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let logs = Capture(Arc::new(Mutex::new(Vec::new())));
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::INFO)
            .finish();

        let mut n = Network::new();
        let a = n.wire("a");
        let b = n.wire("b");
        let x = n.xor2(a, b, "x").unwrap();
        n.probe(x, "sum_bit");

        tracing::subscriber::with_default(subscriber, || {
            n.drive_level(a, High).unwrap();
            // Unchanged output, nothing logged.
            n.drive_level(a, High).unwrap();
            n.drive_level(b, High).unwrap();
        });
        assert_eq!(n.output_state(x), Low);

        let logs = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert_eq!(logs.matches("probed gate changed").count(), 2, "{}", logs);
        assert!(logs.contains("probe=sum_bit"), "{}", logs);
    }
}
