//! Backing resources shared by every HID endpoint.

use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

/// Size of the HID shared memory block mapped into guest processes.
pub const SHARED_MEMORY_SIZE: usize = 0x40000;

static NEXT_INSTANCE: AtomicU64 = AtomicU64::new(1);

/// The HID shared memory block.
#[derive(Debug)]
pub struct HidSharedMemory {
	instance: u64,
	bytes: Box<[u8]>,
}

impl HidSharedMemory {
	fn allocate() -> Self {
		Self {
			instance: NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed),
			bytes: vec![0; SHARED_MEMORY_SIZE].into_boxed_slice(),
		}
	}

	/// Returns the process-unique allocation id.
	#[inline]
	pub fn instance(&self) -> u64 {
		self.instance
	}

	/// Returns the block size in bytes.
	#[inline]
	pub fn size(&self) -> usize {
		self.bytes.len()
	}

	/// Returns the raw block contents.
	#[inline]
	pub fn as_bytes(&self) -> &[u8] {
		&self.bytes
	}
}

/// Shared owner of HID backing state.
///
/// Endpoints hold it behind an `Arc` and call [`initialize`](Self::initialize)
/// before first use. Allocation happens once no matter how many endpoints or
/// threads race to initialize.
#[derive(Debug, Default)]
pub struct ResourceManager {
	shared_memory: OnceLock<HidSharedMemory>,
	initialize_calls: AtomicUsize,
}

impl ResourceManager {
	/// Creates an uninitialized manager.
	pub fn new() -> Self {
		Self::default()
	}

	/// Allocates the backing state on first call; later calls are no-ops.
	pub fn initialize(&self) {
		self.initialize_calls.fetch_add(1, Ordering::Relaxed);
		self.shared_memory.get_or_init(|| {
			let memory = HidSharedMemory::allocate();
			tracing::debug!(
				instance = memory.instance(),
				size = memory.size(),
				"initialized hid resources"
			);
			memory
		});
	}

	/// Returns true once [`initialize`](Self::initialize) has completed.
	#[inline]
	pub fn is_initialized(&self) -> bool {
		self.shared_memory.get().is_some()
	}

	/// Returns the shared memory block, if initialized.
	#[inline]
	pub fn shared_memory(&self) -> Option<&HidSharedMemory> {
		self.shared_memory.get()
	}

	/// Returns how many times [`initialize`](Self::initialize) was called.
	#[inline]
	pub fn initialize_calls(&self) -> usize {
		self.initialize_calls.load(Ordering::Relaxed)
	}
}
