//! Platform-agnostic key representation.
//!
//! Keys are identified by their Linux input-event code. The full set of names a
//! hotkey string may use is the closed [`NAMESPACE`] table below; nothing is
//! resolved dynamically at run time.

use std::collections::HashMap;
use std::sync::LazyLock;

/// A single physical key.
///
/// Values only come from the static key namespace, either through the
/// `Key::KEY_*` constants or through the hotkey parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key(u16);

macro_rules! key_namespace {
    ($($ident:ident = $code:literal => $name:literal,)*) => {
        impl Key {
            $(pub const $ident: Key = Key($code);)*
        }

        /// Every key name a hotkey may use, paired with its key, in code order.
        ///
        /// Names are the kernel `KEY_*` identifiers without the prefix.
        pub static NAMESPACE: &[(&str, Key)] = &[$(($name, Key::$ident),)*];
    };
}

key_namespace! {
    KEY_ESC = 1 => "ESC",
    KEY_1 = 2 => "1",
    KEY_2 = 3 => "2",
    KEY_3 = 4 => "3",
    KEY_4 = 5 => "4",
    KEY_5 = 6 => "5",
    KEY_6 = 7 => "6",
    KEY_7 = 8 => "7",
    KEY_8 = 9 => "8",
    KEY_9 = 10 => "9",
    KEY_0 = 11 => "0",
    KEY_MINUS = 12 => "MINUS",
    KEY_EQUAL = 13 => "EQUAL",
    KEY_BACKSPACE = 14 => "BACKSPACE",
    KEY_TAB = 15 => "TAB",
    KEY_Q = 16 => "Q",
    KEY_W = 17 => "W",
    KEY_E = 18 => "E",
    KEY_R = 19 => "R",
    KEY_T = 20 => "T",
    KEY_Y = 21 => "Y",
    KEY_U = 22 => "U",
    KEY_I = 23 => "I",
    KEY_O = 24 => "O",
    KEY_P = 25 => "P",
    KEY_LEFTBRACE = 26 => "LEFTBRACE",
    KEY_RIGHTBRACE = 27 => "RIGHTBRACE",
    KEY_ENTER = 28 => "ENTER",
    KEY_LEFTCTRL = 29 => "LEFTCTRL",
    KEY_A = 30 => "A",
    KEY_S = 31 => "S",
    KEY_D = 32 => "D",
    KEY_F = 33 => "F",
    KEY_G = 34 => "G",
    KEY_H = 35 => "H",
    KEY_J = 36 => "J",
    KEY_K = 37 => "K",
    KEY_L = 38 => "L",
    KEY_SEMICOLON = 39 => "SEMICOLON",
    KEY_APOSTROPHE = 40 => "APOSTROPHE",
    KEY_GRAVE = 41 => "GRAVE",
    KEY_LEFTSHIFT = 42 => "LEFTSHIFT",
    KEY_BACKSLASH = 43 => "BACKSLASH",
    KEY_Z = 44 => "Z",
    KEY_X = 45 => "X",
    KEY_C = 46 => "C",
    KEY_V = 47 => "V",
    KEY_B = 48 => "B",
    KEY_N = 49 => "N",
    KEY_M = 50 => "M",
    KEY_COMMA = 51 => "COMMA",
    KEY_DOT = 52 => "DOT",
    KEY_SLASH = 53 => "SLASH",
    KEY_RIGHTSHIFT = 54 => "RIGHTSHIFT",
    KEY_KPASTERISK = 55 => "KPASTERISK",
    KEY_LEFTALT = 56 => "LEFTALT",
    KEY_SPACE = 57 => "SPACE",
    KEY_CAPSLOCK = 58 => "CAPSLOCK",
    KEY_F1 = 59 => "F1",
    KEY_F2 = 60 => "F2",
    KEY_F3 = 61 => "F3",
    KEY_F4 = 62 => "F4",
    KEY_F5 = 63 => "F5",
    KEY_F6 = 64 => "F6",
    KEY_F7 = 65 => "F7",
    KEY_F8 = 66 => "F8",
    KEY_F9 = 67 => "F9",
    KEY_F10 = 68 => "F10",
    KEY_NUMLOCK = 69 => "NUMLOCK",
    KEY_SCROLLLOCK = 70 => "SCROLLLOCK",
    KEY_KP7 = 71 => "KP7",
    KEY_KP8 = 72 => "KP8",
    KEY_KP9 = 73 => "KP9",
    KEY_KPMINUS = 74 => "KPMINUS",
    KEY_KP4 = 75 => "KP4",
    KEY_KP5 = 76 => "KP5",
    KEY_KP6 = 77 => "KP6",
    KEY_KPPLUS = 78 => "KPPLUS",
    KEY_KP1 = 79 => "KP1",
    KEY_KP2 = 80 => "KP2",
    KEY_KP3 = 81 => "KP3",
    KEY_KP0 = 82 => "KP0",
    KEY_KPDOT = 83 => "KPDOT",
    KEY_ZENKAKUHANKAKU = 85 => "ZENKAKUHANKAKU",
    KEY_102ND = 86 => "102ND",
    KEY_F11 = 87 => "F11",
    KEY_F12 = 88 => "F12",
    KEY_RO = 89 => "RO",
    KEY_KATAKANA = 90 => "KATAKANA",
    KEY_HIRAGANA = 91 => "HIRAGANA",
    KEY_HENKAN = 92 => "HENKAN",
    KEY_KATAKANAHIRAGANA = 93 => "KATAKANAHIRAGANA",
    KEY_MUHENKAN = 94 => "MUHENKAN",
    KEY_KPJPCOMMA = 95 => "KPJPCOMMA",
    KEY_KPENTER = 96 => "KPENTER",
    KEY_RIGHTCTRL = 97 => "RIGHTCTRL",
    KEY_KPSLASH = 98 => "KPSLASH",
    KEY_SYSRQ = 99 => "SYSRQ",
    KEY_RIGHTALT = 100 => "RIGHTALT",
    KEY_LINEFEED = 101 => "LINEFEED",
    KEY_HOME = 102 => "HOME",
    KEY_UP = 103 => "UP",
    KEY_PAGEUP = 104 => "PAGEUP",
    KEY_LEFT = 105 => "LEFT",
    KEY_RIGHT = 106 => "RIGHT",
    KEY_END = 107 => "END",
    KEY_DOWN = 108 => "DOWN",
    KEY_PAGEDOWN = 109 => "PAGEDOWN",
    KEY_INSERT = 110 => "INSERT",
    KEY_DELETE = 111 => "DELETE",
    KEY_MACRO = 112 => "MACRO",
    KEY_MUTE = 113 => "MUTE",
    KEY_VOLUMEDOWN = 114 => "VOLUMEDOWN",
    KEY_VOLUMEUP = 115 => "VOLUMEUP",
    KEY_POWER = 116 => "POWER",
    KEY_KPEQUAL = 117 => "KPEQUAL",
    KEY_KPPLUSMINUS = 118 => "KPPLUSMINUS",
    KEY_PAUSE = 119 => "PAUSE",
    KEY_SCALE = 120 => "SCALE",
    KEY_KPCOMMA = 121 => "KPCOMMA",
    KEY_HANGEUL = 122 => "HANGEUL",
    KEY_HANJA = 123 => "HANJA",
    KEY_YEN = 124 => "YEN",
    KEY_LEFTMETA = 125 => "LEFTMETA",
    KEY_RIGHTMETA = 126 => "RIGHTMETA",
    KEY_COMPOSE = 127 => "COMPOSE",
    KEY_STOP = 128 => "STOP",
    KEY_AGAIN = 129 => "AGAIN",
    KEY_PROPS = 130 => "PROPS",
    KEY_UNDO = 131 => "UNDO",
    KEY_FRONT = 132 => "FRONT",
    KEY_COPY = 133 => "COPY",
    KEY_OPEN = 134 => "OPEN",
    KEY_PASTE = 135 => "PASTE",
    KEY_FIND = 136 => "FIND",
    KEY_CUT = 137 => "CUT",
    KEY_HELP = 138 => "HELP",
    KEY_MENU = 139 => "MENU",
    KEY_CALC = 140 => "CALC",
    KEY_SETUP = 141 => "SETUP",
    KEY_SLEEP = 142 => "SLEEP",
    KEY_WAKEUP = 143 => "WAKEUP",
    KEY_FILE = 144 => "FILE",
    KEY_SENDFILE = 145 => "SENDFILE",
    KEY_DELETEFILE = 146 => "DELETEFILE",
    KEY_XFER = 147 => "XFER",
    KEY_PROG1 = 148 => "PROG1",
    KEY_PROG2 = 149 => "PROG2",
    KEY_WWW = 150 => "WWW",
    KEY_MSDOS = 151 => "MSDOS",
    KEY_COFFEE = 152 => "COFFEE",
    KEY_ROTATE_DISPLAY = 153 => "ROTATE_DISPLAY",
    KEY_CYCLEWINDOWS = 154 => "CYCLEWINDOWS",
    KEY_MAIL = 155 => "MAIL",
    KEY_BOOKMARKS = 156 => "BOOKMARKS",
    KEY_COMPUTER = 157 => "COMPUTER",
    KEY_BACK = 158 => "BACK",
    KEY_FORWARD = 159 => "FORWARD",
    KEY_CLOSECD = 160 => "CLOSECD",
    KEY_EJECTCD = 161 => "EJECTCD",
    KEY_EJECTCLOSECD = 162 => "EJECTCLOSECD",
    KEY_NEXTSONG = 163 => "NEXTSONG",
    KEY_PLAYPAUSE = 164 => "PLAYPAUSE",
    KEY_PREVIOUSSONG = 165 => "PREVIOUSSONG",
    KEY_STOPCD = 166 => "STOPCD",
    KEY_RECORD = 167 => "RECORD",
    KEY_REWIND = 168 => "REWIND",
    KEY_PHONE = 169 => "PHONE",
    KEY_ISO = 170 => "ISO",
    KEY_CONFIG = 171 => "CONFIG",
    KEY_HOMEPAGE = 172 => "HOMEPAGE",
    KEY_REFRESH = 173 => "REFRESH",
    KEY_EXIT = 174 => "EXIT",
    KEY_MOVE = 175 => "MOVE",
    KEY_EDIT = 176 => "EDIT",
    KEY_SCROLLUP = 177 => "SCROLLUP",
    KEY_SCROLLDOWN = 178 => "SCROLLDOWN",
    KEY_KPLEFTPAREN = 179 => "KPLEFTPAREN",
    KEY_KPRIGHTPAREN = 180 => "KPRIGHTPAREN",
    KEY_NEW = 181 => "NEW",
    KEY_REDO = 182 => "REDO",
    KEY_F13 = 183 => "F13",
    KEY_F14 = 184 => "F14",
    KEY_F15 = 185 => "F15",
    KEY_F16 = 186 => "F16",
    KEY_F17 = 187 => "F17",
    KEY_F18 = 188 => "F18",
    KEY_F19 = 189 => "F19",
    KEY_F20 = 190 => "F20",
    KEY_F21 = 191 => "F21",
    KEY_F22 = 192 => "F22",
    KEY_F23 = 193 => "F23",
    KEY_F24 = 194 => "F24",
    KEY_PLAYCD = 200 => "PLAYCD",
    KEY_PAUSECD = 201 => "PAUSECD",
    KEY_PROG3 = 202 => "PROG3",
    KEY_PROG4 = 203 => "PROG4",
    KEY_ALL_APPLICATIONS = 204 => "ALL_APPLICATIONS",
    KEY_SUSPEND = 205 => "SUSPEND",
    KEY_CLOSE = 206 => "CLOSE",
    KEY_PLAY = 207 => "PLAY",
    KEY_FASTFORWARD = 208 => "FASTFORWARD",
    KEY_BASSBOOST = 209 => "BASSBOOST",
    KEY_PRINT = 210 => "PRINT",
    KEY_HP = 211 => "HP",
    KEY_CAMERA = 212 => "CAMERA",
    KEY_SOUND = 213 => "SOUND",
    KEY_QUESTION = 214 => "QUESTION",
    KEY_EMAIL = 215 => "EMAIL",
    KEY_CHAT = 216 => "CHAT",
    KEY_SEARCH = 217 => "SEARCH",
    KEY_CONNECT = 218 => "CONNECT",
    KEY_FINANCE = 219 => "FINANCE",
    KEY_SPORT = 220 => "SPORT",
    KEY_SHOP = 221 => "SHOP",
    KEY_ALTERASE = 222 => "ALTERASE",
    KEY_CANCEL = 223 => "CANCEL",
    KEY_BRIGHTNESSDOWN = 224 => "BRIGHTNESSDOWN",
    KEY_BRIGHTNESSUP = 225 => "BRIGHTNESSUP",
    KEY_MEDIA = 226 => "MEDIA",
    KEY_SWITCHVIDEOMODE = 227 => "SWITCHVIDEOMODE",
    KEY_KBDILLUMTOGGLE = 228 => "KBDILLUMTOGGLE",
    KEY_KBDILLUMDOWN = 229 => "KBDILLUMDOWN",
    KEY_KBDILLUMUP = 230 => "KBDILLUMUP",
    KEY_SEND = 231 => "SEND",
    KEY_REPLY = 232 => "REPLY",
    KEY_FORWARDMAIL = 233 => "FORWARDMAIL",
    KEY_SAVE = 234 => "SAVE",
    KEY_DOCUMENTS = 235 => "DOCUMENTS",
    KEY_BATTERY = 236 => "BATTERY",
    KEY_BLUETOOTH = 237 => "BLUETOOTH",
    KEY_WLAN = 238 => "WLAN",
    KEY_UWB = 239 => "UWB",
    KEY_UNKNOWN = 240 => "UNKNOWN",
    KEY_VIDEO_NEXT = 241 => "VIDEO_NEXT",
    KEY_VIDEO_PREV = 242 => "VIDEO_PREV",
    KEY_BRIGHTNESS_CYCLE = 243 => "BRIGHTNESS_CYCLE",
    KEY_BRIGHTNESS_AUTO = 244 => "BRIGHTNESS_AUTO",
    KEY_DISPLAY_OFF = 245 => "DISPLAY_OFF",
    KEY_WWAN = 246 => "WWAN",
    KEY_RFKILL = 247 => "RFKILL",
    KEY_MICMUTE = 248 => "MICMUTE",
    KEY_OK = 352 => "OK",
    KEY_SELECT = 353 => "SELECT",
    KEY_GOTO = 354 => "GOTO",
    KEY_CLEAR = 355 => "CLEAR",
    KEY_POWER2 = 356 => "POWER2",
    KEY_OPTION = 357 => "OPTION",
    KEY_INFO = 358 => "INFO",
    KEY_TIME = 359 => "TIME",
    KEY_VENDOR = 360 => "VENDOR",
    KEY_ARCHIVE = 361 => "ARCHIVE",
    KEY_PROGRAM = 362 => "PROGRAM",
    KEY_CHANNEL = 363 => "CHANNEL",
    KEY_FAVORITES = 364 => "FAVORITES",
    KEY_EPG = 365 => "EPG",
    KEY_PVR = 366 => "PVR",
    KEY_MHP = 367 => "MHP",
    KEY_LANGUAGE = 368 => "LANGUAGE",
    KEY_TITLE = 369 => "TITLE",
    KEY_SUBTITLE = 370 => "SUBTITLE",
    KEY_ANGLE = 371 => "ANGLE",
    KEY_FULL_SCREEN = 372 => "FULL_SCREEN",
    KEY_MODE = 373 => "MODE",
    KEY_KEYBOARD = 374 => "KEYBOARD",
    KEY_ASPECT_RATIO = 375 => "ASPECT_RATIO",
    KEY_PC = 376 => "PC",
    KEY_TV = 377 => "TV",
    KEY_TV2 = 378 => "TV2",
    KEY_VCR = 379 => "VCR",
    KEY_VCR2 = 380 => "VCR2",
    KEY_SAT = 381 => "SAT",
    KEY_SAT2 = 382 => "SAT2",
    KEY_CD = 383 => "CD",
    KEY_TAPE = 384 => "TAPE",
    KEY_RADIO = 385 => "RADIO",
    KEY_TUNER = 386 => "TUNER",
    KEY_PLAYER = 387 => "PLAYER",
    KEY_TEXT = 388 => "TEXT",
    KEY_DVD = 389 => "DVD",
    KEY_AUX = 390 => "AUX",
    KEY_MP3 = 391 => "MP3",
    KEY_AUDIO = 392 => "AUDIO",
    KEY_VIDEO = 393 => "VIDEO",
    KEY_DIRECTORY = 394 => "DIRECTORY",
    KEY_LIST = 395 => "LIST",
    KEY_MEMO = 396 => "MEMO",
    KEY_CALENDAR = 397 => "CALENDAR",
    KEY_RED = 398 => "RED",
    KEY_GREEN = 399 => "GREEN",
    KEY_YELLOW = 400 => "YELLOW",
    KEY_BLUE = 401 => "BLUE",
    KEY_CHANNELUP = 402 => "CHANNELUP",
    KEY_CHANNELDOWN = 403 => "CHANNELDOWN",
    KEY_FIRST = 404 => "FIRST",
    KEY_LAST = 405 => "LAST",
    KEY_AB = 406 => "AB",
    KEY_NEXT = 407 => "NEXT",
    KEY_RESTART = 408 => "RESTART",
    KEY_SLOW = 409 => "SLOW",
    KEY_SHUFFLE = 410 => "SHUFFLE",
    KEY_BREAK = 411 => "BREAK",
    KEY_PREVIOUS = 412 => "PREVIOUS",
    KEY_DIGITS = 413 => "DIGITS",
    KEY_TEEN = 414 => "TEEN",
    KEY_TWEN = 415 => "TWEN",
    KEY_VIDEOPHONE = 416 => "VIDEOPHONE",
    KEY_GAMES = 417 => "GAMES",
    KEY_ZOOMIN = 418 => "ZOOMIN",
    KEY_ZOOMOUT = 419 => "ZOOMOUT",
    KEY_ZOOMRESET = 420 => "ZOOMRESET",
    KEY_WORDPROCESSOR = 421 => "WORDPROCESSOR",
    KEY_EDITOR = 422 => "EDITOR",
    KEY_SPREADSHEET = 423 => "SPREADSHEET",
    KEY_GRAPHICSEDITOR = 424 => "GRAPHICSEDITOR",
    KEY_PRESENTATION = 425 => "PRESENTATION",
    KEY_DATABASE = 426 => "DATABASE",
    KEY_NEWS = 427 => "NEWS",
    KEY_VOICEMAIL = 428 => "VOICEMAIL",
    KEY_ADDRESSBOOK = 429 => "ADDRESSBOOK",
    KEY_MESSENGER = 430 => "MESSENGER",
    KEY_DISPLAYTOGGLE = 431 => "DISPLAYTOGGLE",
    KEY_SPELLCHECK = 432 => "SPELLCHECK",
    KEY_LOGOFF = 433 => "LOGOFF",
    KEY_DOLLAR = 434 => "DOLLAR",
    KEY_EURO = 435 => "EURO",
    KEY_FRAMEBACK = 436 => "FRAMEBACK",
    KEY_FRAMEFORWARD = 437 => "FRAMEFORWARD",
    KEY_CONTEXT_MENU = 438 => "CONTEXT_MENU",
    KEY_MEDIA_REPEAT = 439 => "MEDIA_REPEAT",
    KEY_10CHANNELSUP = 440 => "10CHANNELSUP",
    KEY_10CHANNELSDOWN = 441 => "10CHANNELSDOWN",
    KEY_IMAGES = 442 => "IMAGES",
    KEY_NOTIFICATION_CENTER = 444 => "NOTIFICATION_CENTER",
    KEY_PICKUP_PHONE = 445 => "PICKUP_PHONE",
    KEY_HANGUP_PHONE = 446 => "HANGUP_PHONE",
    KEY_LINK_PHONE = 447 => "LINK_PHONE",
    KEY_DEL_EOL = 448 => "DEL_EOL",
    KEY_DEL_EOS = 449 => "DEL_EOS",
    KEY_INS_LINE = 450 => "INS_LINE",
    KEY_DEL_LINE = 451 => "DEL_LINE",
    KEY_FN = 464 => "FN",
    KEY_FN_ESC = 465 => "FN_ESC",
    KEY_FN_F1 = 466 => "FN_F1",
    KEY_FN_F2 = 467 => "FN_F2",
    KEY_FN_F3 = 468 => "FN_F3",
    KEY_FN_F4 = 469 => "FN_F4",
    KEY_FN_F5 = 470 => "FN_F5",
    KEY_FN_F6 = 471 => "FN_F6",
    KEY_FN_F7 = 472 => "FN_F7",
    KEY_FN_F8 = 473 => "FN_F8",
    KEY_FN_F9 = 474 => "FN_F9",
    KEY_FN_F10 = 475 => "FN_F10",
    KEY_FN_F11 = 476 => "FN_F11",
    KEY_FN_F12 = 477 => "FN_F12",
    KEY_FN_1 = 478 => "FN_1",
    KEY_FN_2 = 479 => "FN_2",
    KEY_FN_D = 480 => "FN_D",
    KEY_FN_E = 481 => "FN_E",
    KEY_FN_F = 482 => "FN_F",
    KEY_FN_S = 483 => "FN_S",
    KEY_FN_B = 484 => "FN_B",
    KEY_FN_RIGHT_SHIFT = 485 => "FN_RIGHT_SHIFT",
    KEY_BRL_DOT1 = 497 => "BRL_DOT1",
    KEY_BRL_DOT2 = 498 => "BRL_DOT2",
    KEY_BRL_DOT3 = 499 => "BRL_DOT3",
    KEY_BRL_DOT4 = 500 => "BRL_DOT4",
    KEY_BRL_DOT5 = 501 => "BRL_DOT5",
    KEY_BRL_DOT6 = 502 => "BRL_DOT6",
    KEY_BRL_DOT7 = 503 => "BRL_DOT7",
    KEY_BRL_DOT8 = 504 => "BRL_DOT8",
    KEY_BRL_DOT9 = 505 => "BRL_DOT9",
    KEY_BRL_DOT10 = 506 => "BRL_DOT10",
    KEY_NUMERIC_0 = 512 => "NUMERIC_0",
    KEY_NUMERIC_1 = 513 => "NUMERIC_1",
    KEY_NUMERIC_2 = 514 => "NUMERIC_2",
    KEY_NUMERIC_3 = 515 => "NUMERIC_3",
    KEY_NUMERIC_4 = 516 => "NUMERIC_4",
    KEY_NUMERIC_5 = 517 => "NUMERIC_5",
    KEY_NUMERIC_6 = 518 => "NUMERIC_6",
    KEY_NUMERIC_7 = 519 => "NUMERIC_7",
    KEY_NUMERIC_8 = 520 => "NUMERIC_8",
    KEY_NUMERIC_9 = 521 => "NUMERIC_9",
    KEY_NUMERIC_STAR = 522 => "NUMERIC_STAR",
    KEY_NUMERIC_POUND = 523 => "NUMERIC_POUND",
    KEY_NUMERIC_A = 524 => "NUMERIC_A",
    KEY_NUMERIC_B = 525 => "NUMERIC_B",
    KEY_NUMERIC_C = 526 => "NUMERIC_C",
    KEY_NUMERIC_D = 527 => "NUMERIC_D",
    KEY_CAMERA_FOCUS = 528 => "CAMERA_FOCUS",
    KEY_WPS_BUTTON = 529 => "WPS_BUTTON",
    KEY_TOUCHPAD_TOGGLE = 530 => "TOUCHPAD_TOGGLE",
    KEY_TOUCHPAD_ON = 531 => "TOUCHPAD_ON",
    KEY_TOUCHPAD_OFF = 532 => "TOUCHPAD_OFF",
    KEY_CAMERA_ZOOMIN = 533 => "CAMERA_ZOOMIN",
    KEY_CAMERA_ZOOMOUT = 534 => "CAMERA_ZOOMOUT",
    KEY_CAMERA_UP = 535 => "CAMERA_UP",
    KEY_CAMERA_DOWN = 536 => "CAMERA_DOWN",
    KEY_CAMERA_LEFT = 537 => "CAMERA_LEFT",
    KEY_CAMERA_RIGHT = 538 => "CAMERA_RIGHT",
    KEY_ATTENDANT_ON = 539 => "ATTENDANT_ON",
    KEY_ATTENDANT_OFF = 540 => "ATTENDANT_OFF",
    KEY_ATTENDANT_TOGGLE = 541 => "ATTENDANT_TOGGLE",
    KEY_LIGHTS_TOGGLE = 542 => "LIGHTS_TOGGLE",
    KEY_ALS_TOGGLE = 560 => "ALS_TOGGLE",
    KEY_ROTATE_LOCK_TOGGLE = 561 => "ROTATE_LOCK_TOGGLE",
    KEY_REFRESH_RATE_TOGGLE = 562 => "REFRESH_RATE_TOGGLE",
    KEY_BUTTONCONFIG = 576 => "BUTTONCONFIG",
    KEY_TASKMANAGER = 577 => "TASKMANAGER",
    KEY_JOURNAL = 578 => "JOURNAL",
    KEY_CONTROLPANEL = 579 => "CONTROLPANEL",
    KEY_APPSELECT = 580 => "APPSELECT",
    KEY_SCREENSAVER = 581 => "SCREENSAVER",
    KEY_VOICECOMMAND = 582 => "VOICECOMMAND",
    KEY_ASSISTANT = 583 => "ASSISTANT",
    KEY_KBD_LAYOUT_NEXT = 584 => "KBD_LAYOUT_NEXT",
    KEY_EMOJI_PICKER = 585 => "EMOJI_PICKER",
    KEY_DICTATE = 586 => "DICTATE",
    KEY_BRIGHTNESS_MIN = 592 => "BRIGHTNESS_MIN",
    KEY_BRIGHTNESS_MAX = 593 => "BRIGHTNESS_MAX",
    KEY_KBDINPUTASSIST_PREV = 608 => "KBDINPUTASSIST_PREV",
    KEY_KBDINPUTASSIST_NEXT = 609 => "KBDINPUTASSIST_NEXT",
    KEY_KBDINPUTASSIST_PREVGROUP = 610 => "KBDINPUTASSIST_PREVGROUP",
    KEY_KBDINPUTASSIST_NEXTGROUP = 611 => "KBDINPUTASSIST_NEXTGROUP",
    KEY_KBDINPUTASSIST_ACCEPT = 612 => "KBDINPUTASSIST_ACCEPT",
    KEY_KBDINPUTASSIST_CANCEL = 613 => "KBDINPUTASSIST_CANCEL",
    KEY_RIGHT_UP = 614 => "RIGHT_UP",
    KEY_RIGHT_DOWN = 615 => "RIGHT_DOWN",
    KEY_LEFT_UP = 616 => "LEFT_UP",
    KEY_LEFT_DOWN = 617 => "LEFT_DOWN",
    KEY_ROOT_MENU = 618 => "ROOT_MENU",
    KEY_MEDIA_TOP_MENU = 619 => "MEDIA_TOP_MENU",
    KEY_NUMERIC_11 = 620 => "NUMERIC_11",
    KEY_NUMERIC_12 = 621 => "NUMERIC_12",
    KEY_AUDIO_DESC = 622 => "AUDIO_DESC",
    KEY_3D_MODE = 623 => "3D_MODE",
    KEY_NEXT_FAVORITE = 624 => "NEXT_FAVORITE",
    KEY_STOP_RECORD = 625 => "STOP_RECORD",
    KEY_PAUSE_RECORD = 626 => "PAUSE_RECORD",
    KEY_VOD = 627 => "VOD",
    KEY_UNMUTE = 628 => "UNMUTE",
    KEY_FASTREVERSE = 629 => "FASTREVERSE",
    KEY_SLOWREVERSE = 630 => "SLOWREVERSE",
    KEY_DATA = 631 => "DATA",
    KEY_ONSCREEN_KEYBOARD = 632 => "ONSCREEN_KEYBOARD",
    KEY_PRIVACY_SCREEN_TOGGLE = 633 => "PRIVACY_SCREEN_TOGGLE",
    KEY_SELECTIVE_SCREENSHOT = 634 => "SELECTIVE_SCREENSHOT",
    KEY_NEXT_ELEMENT = 635 => "NEXT_ELEMENT",
    KEY_PREVIOUS_ELEMENT = 636 => "PREVIOUS_ELEMENT",
    KEY_AUTOPILOT_ENGAGE_TOGGLE = 637 => "AUTOPILOT_ENGAGE_TOGGLE",
    KEY_MARK_WAYPOINT = 638 => "MARK_WAYPOINT",
    KEY_SOS = 639 => "SOS",
    KEY_NAV_CHART = 640 => "NAV_CHART",
    KEY_FISHING_CHART = 641 => "FISHING_CHART",
    KEY_SINGLE_RANGE_RADAR = 642 => "SINGLE_RANGE_RADAR",
    KEY_DUAL_RANGE_RADAR = 643 => "DUAL_RANGE_RADAR",
    KEY_RADAR_OVERLAY = 644 => "RADAR_OVERLAY",
    KEY_TRADITIONAL_SONAR = 645 => "TRADITIONAL_SONAR",
    KEY_CLEARVU_SONAR = 646 => "CLEARVU_SONAR",
    KEY_SIDEVU_SONAR = 647 => "SIDEVU_SONAR",
    KEY_NAV_INFO = 648 => "NAV_INFO",
    KEY_BRIGHTNESS_MENU = 649 => "BRIGHTNESS_MENU",
    KEY_MACRO1 = 656 => "MACRO1",
    KEY_MACRO2 = 657 => "MACRO2",
    KEY_MACRO3 = 658 => "MACRO3",
    KEY_MACRO4 = 659 => "MACRO4",
    KEY_MACRO5 = 660 => "MACRO5",
    KEY_MACRO6 = 661 => "MACRO6",
    KEY_MACRO7 = 662 => "MACRO7",
    KEY_MACRO8 = 663 => "MACRO8",
    KEY_MACRO9 = 664 => "MACRO9",
    KEY_MACRO10 = 665 => "MACRO10",
    KEY_MACRO11 = 666 => "MACRO11",
    KEY_MACRO12 = 667 => "MACRO12",
    KEY_MACRO13 = 668 => "MACRO13",
    KEY_MACRO14 = 669 => "MACRO14",
    KEY_MACRO15 = 670 => "MACRO15",
    KEY_MACRO16 = 671 => "MACRO16",
    KEY_MACRO17 = 672 => "MACRO17",
    KEY_MACRO18 = 673 => "MACRO18",
    KEY_MACRO19 = 674 => "MACRO19",
    KEY_MACRO20 = 675 => "MACRO20",
    KEY_MACRO21 = 676 => "MACRO21",
    KEY_MACRO22 = 677 => "MACRO22",
    KEY_MACRO23 = 678 => "MACRO23",
    KEY_MACRO24 = 679 => "MACRO24",
    KEY_MACRO25 = 680 => "MACRO25",
    KEY_MACRO26 = 681 => "MACRO26",
    KEY_MACRO27 = 682 => "MACRO27",
    KEY_MACRO28 = 683 => "MACRO28",
    KEY_MACRO29 = 684 => "MACRO29",
    KEY_MACRO30 = 685 => "MACRO30",
    KEY_MACRO_RECORD_START = 688 => "MACRO_RECORD_START",
    KEY_MACRO_RECORD_STOP = 689 => "MACRO_RECORD_STOP",
    KEY_MACRO_PRESET_CYCLE = 690 => "MACRO_PRESET_CYCLE",
    KEY_MACRO_PRESET1 = 691 => "MACRO_PRESET1",
    KEY_MACRO_PRESET2 = 692 => "MACRO_PRESET2",
    KEY_MACRO_PRESET3 = 693 => "MACRO_PRESET3",
    KEY_KBD_LCD_MENU1 = 696 => "KBD_LCD_MENU1",
    KEY_KBD_LCD_MENU2 = 697 => "KBD_LCD_MENU2",
    KEY_KBD_LCD_MENU3 = 698 => "KBD_LCD_MENU3",
    KEY_KBD_LCD_MENU4 = 699 => "KBD_LCD_MENU4",
    KEY_KBD_LCD_MENU5 = 700 => "KBD_LCD_MENU5",
}

/// Historical kernel names that share a code with a [`NAMESPACE`] entry.
static ALIASES: &[(&str, Key)] = &[
    ("HANGUEL", Key::KEY_HANGEUL),
    ("SCREENLOCK", Key::KEY_COFFEE),
    ("DIRECTION", Key::KEY_ROTATE_DISPLAY),
    ("DASHBOARD", Key::KEY_ALL_APPLICATIONS),
    ("BRIGHTNESS_ZERO", Key::KEY_BRIGHTNESS_AUTO),
    ("WIMAX", Key::KEY_WWAN),
    ("ZOOM", Key::KEY_FULL_SCREEN),
    ("SCREEN", Key::KEY_ASPECT_RATIO),
    ("BRIGHTNESS_TOGGLE", Key::KEY_DISPLAYTOGGLE),
];

static BY_NAME: LazyLock<HashMap<&'static str, Key>> = LazyLock::new(|| {
    NAMESPACE
        .iter()
        .chain(ALIASES.iter())
        .copied()
        .collect()
});

impl Key {
    /// Look a key up by its namespace name (e.g. `"LEFTCTRL"`, `"KPENTER"`).
    ///
    /// The name must already be upper-case.
    pub fn from_name(name: &str) -> Option<Self> {
        BY_NAME.get(name).copied()
    }

    /// The canonical namespace name of this key.
    pub fn name(&self) -> &'static str {
        NAMESPACE
            .iter()
            .find(|(_, key)| key == self)
            .map(|(name, _)| *name)
            .unwrap_or("UNKNOWN")
    }

    /// The Linux input-event code for this key.
    pub fn code(&self) -> u16 {
        self.0
    }

    /// Iterate over every key in the namespace.
    pub fn all() -> impl Iterator<Item = Key> {
        NAMESPACE.iter().map(|&(_, key)| key)
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_from_name() {
        assert_eq!(Key::from_name("LEFTCTRL"), Some(Key::KEY_LEFTCTRL));
        assert_eq!(Key::from_name("102ND"), Some(Key::KEY_102ND));
        assert_eq!(Key::from_name("leftctrl"), None);
        assert_eq!(Key::from_name("FOO"), None);
    }

    #[test]
    fn test_aliases_share_codes() {
        assert_eq!(Key::from_name("SCREENLOCK"), Some(Key::KEY_COFFEE));
        assert_eq!(Key::from_name("HANGUEL"), Key::from_name("HANGEUL"));
    }

    #[test]
    fn test_names_and_codes_are_unique() {
        let names: HashSet<_> = NAMESPACE.iter().map(|(name, _)| *name).collect();
        let codes: HashSet<_> = Key::all().map(|k| k.code()).collect();
        assert_eq!(names.len(), NAMESPACE.len());
        assert_eq!(codes.len(), NAMESPACE.len());
    }

    #[test]
    fn test_well_known_codes() {
        assert_eq!(Key::KEY_A.code(), 30);
        assert_eq!(Key::KEY_LEFTMETA.code(), 125);
        assert_eq!(Key::KEY_F24.code(), 194);
        assert_eq!(Key::KEY_FN_F1.code(), 0x1d2);
        assert_eq!(Key::KEY_NUMERIC_0.code(), 0x200);
        assert_eq!(Key::KEY_MACRO1.code(), 0x290);
    }

    #[test]
    fn test_high_range_names() {
        for name in [
            "FN_F1",
            "BRL_DOT1",
            "NUMERIC_0",
            "ASSISTANT",
            "EMOJI_PICKER",
            "SCREENSAVER",
            "BRIGHTNESS_MIN",
            "BRIGHTNESS_MAX",
            "TOUCHPAD_TOGGLE",
            "KBDINPUTASSIST_PREV",
            "MACRO1",
            "MACRO30",
        ] {
            let key = Key::from_name(name).unwrap_or_else(|| panic!("{name} missing"));
            assert_eq!(key.name(), name);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Key::KEY_LEFTSHIFT.to_string(), "LEFTSHIFT");
        assert_eq!(Key::KEY_1.to_string(), "1");
    }
}
