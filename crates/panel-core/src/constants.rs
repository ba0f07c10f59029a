// Panel transition timing shared by every host (browser and simulator).
//
// The reveal delay lets the browser commit the pre-animation pose before the
// shown marker lands, so the CSS transition animates instead of snapping.
// The hide delay must outlast the stylesheet's exit transition so the
// wrapper section only leaves layout once the panel is off-screen.

// Open: wait before applying the shown marker (ms)
pub const REVEAL_DELAY_MS: u32 = 50;

// Close: wait before hiding the wrapper section (ms)
pub const HIDE_DELAY_MS: u32 = 200;

// Exit transition length used by the site's stylesheet (Tailwind default)
pub const CSS_TRANSITION_MS: u32 = 150;
