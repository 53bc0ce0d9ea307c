pub const SHELL: &str = "min-h-screen w-screen bg-gray-900 text-white flex flex-col";
pub const NAV: &str = "fixed top-0 z-50 w-full bg-gray-900/80 backdrop-blur-md border-b border-white/10";
pub const NAV_INNER: &str = "w-full h-16 px-4 sm:px-6 lg:px-8 flex items-center justify-between";
pub const NAV_BRAND: &str = "flex items-center text-xl font-black tracking-tight text-white hover:text-cyan-400 transition-colors duration-200";
pub const NAV_ITEMS: &str = "flex items-center space-x-4";
pub const NAV_LINK: &str = "px-3 py-2 text-sm font-medium text-gray-300 hover:text-cyan-400 transition-colors duration-200";
pub const NAV_BALANCE: &str = "flex items-center px-3 py-1 bg-gray-800 rounded-lg text-sm font-bold text-yellow-400 font-mono";
pub const CONTAINER: &str = "container mx-auto px-4 py-8";
pub const CARD: &str = "bg-gray-800 rounded-lg shadow-lg overflow-hidden";
pub const CARD_HOVER: &str = "bg-gray-800 rounded-lg shadow-lg overflow-hidden transform transition-transform hover:scale-105 cursor-pointer";
pub const BUTTON_PRIMARY: &str = "bg-green-600 text-white font-bold py-3 px-10 rounded-lg text-xl hover:bg-green-500 disabled:bg-gray-600 transition-colors";
pub const BUTTON_SECONDARY: &str = "bg-indigo-600 text-white font-bold py-2 px-6 rounded-lg hover:bg-indigo-500 transition-colors";
pub const BUTTON_DANGER: &str = "bg-red-500/10 border border-red-500/50 hover:bg-red-500 text-red-500 hover:text-white font-bold py-3 px-6 rounded-xl transition-all disabled:opacity-50";
pub const INPUT: &str = "w-full px-5 py-3 bg-slate-950/50 border border-slate-700 rounded-lg focus:outline-none focus:border-cyan-500 focus:ring-1 focus:ring-cyan-500 transition-all text-slate-200 placeholder-slate-500";
pub const TEXT_H1: &str = "text-3xl font-bold text-white";
pub const TEXT_ERROR: &str = "text-red-500 mt-4 text-center";
pub const ALERT_ERROR: &str = "p-4 mb-6 bg-red-500/10 border border-red-500/20 text-red-400 rounded-xl text-center";
pub const ALERT_SUCCESS: &str = "p-4 mb-6 bg-green-500/10 border border-green-500/20 text-green-400 rounded-xl text-center";
pub const LOADING_SPINNER: &str = "animate-spin rounded-full h-12 w-12 border-t-2 border-b-2 border-white";
pub const MODAL_BACKDROP: &str = "fixed inset-0 bg-black bg-opacity-70 z-20 flex items-center justify-center";
pub const MODAL_PANEL: &str = "bg-gray-800 p-6 rounded-lg text-center shadow-xl";
pub const AUTH_CARD: &str = "w-full max-w-md p-8 bg-slate-900/80 border border-white/10 rounded-2xl shadow-xl backdrop-blur-xl relative";
pub const AUTH_BUTTON: &str = "w-full py-3.5 bg-gradient-to-r from-indigo-600 to-purple-600 rounded-lg font-bold text-lg uppercase tracking-wide hover:from-indigo-500 hover:to-purple-500 transition-all shadow-lg disabled:opacity-50";
pub const LINK: &str = "font-bold text-cyan-400 hover:text-cyan-300 transition-colors";
