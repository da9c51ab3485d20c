//! Load-state bits reported by the engine's progress listener.

bitflags::bitflags! {
    /// State bits passed to `onStateChange`. Values match the engine's
    /// web-progress listener constants; unknown bits are retained.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct StateFlags: u32 {
        const START        = 0x0000_0001;
        const REDIRECTING  = 0x0000_0002;
        const TRANSFERRING = 0x0000_0004;
        const NEGOTIATING  = 0x0000_0008;
        const STOP         = 0x0000_0010;

        const IS_REQUEST   = 0x0001_0000;
        const IS_DOCUMENT  = 0x0002_0000;
        const IS_NETWORK   = 0x0004_0000;
        const IS_WINDOW    = 0x0008_0000;
    }
}
